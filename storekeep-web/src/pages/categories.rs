use crate::api::StorekeepClient;
use crate::components::loading::Loading;
use crate::models::toasts::{self, ToastState};
use crate::routes::AdminRoute;
use shared::models::Category;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let categories = use_state(|| None::<Vec<Category>>);
    let reload = use_state(|| 0u32);
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    {
        let categories_handle = categories.clone();
        let toast_dispatch = toast_dispatch.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.list_categories().await {
                    Ok(loaded) => categories_handle.set(Some(loaded)),
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to load categories: {err}"));
                        categories_handle.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let on_delete = {
        let reload = reload.clone();
        let toast_dispatch = toast_dispatch;
        Callback::from(move |(id, name): (i64, String)| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!("Delete category \"{name}\"?"))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let reload = reload.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.delete_category(id).await {
                    Ok(()) => {
                        toasts::success(&toast_dispatch, "Category deleted");
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to delete category: {err}"));
                    }
                }
            });
        })
    };

    let Some(categories) = &*categories else {
        return html! { <Loading /> };
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Categories"}</h1>
                <Link<AdminRoute> to={AdminRoute::CategoryNew} classes="btn btn-primary btn-sm">
                    {"New category"}
                </Link<AdminRoute>>
            </div>
            if categories.is_empty() {
                <p class="text-base-content/60">{"No categories yet."}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Slug"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for categories.iter().map(|category| {
                            let id = category.id;
                            let name = category.name.clone();
                            let on_delete = on_delete.clone();
                            html! {
                                <tr>
                                    <td>{ &category.name }</td>
                                    <td><code>{ &category.slug }</code></td>
                                    <td>
                                        <button
                                            class="btn btn-ghost btn-xs text-error"
                                            onclick={Callback::from(move |_| on_delete.emit((id, name.clone())))}
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
