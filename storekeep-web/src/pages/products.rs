use crate::api::{ListQuery, StorekeepClient};
use crate::components::loading::Loading;
use crate::models::toasts::{self, ToastState};
use crate::routes::AdminRoute;
use crate::util::format_price;
use shared::models::Product;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let products = use_state(|| None::<Vec<Product>>);
    let search = use_state(String::new);
    // Bumped after every mutation to refetch the list.
    let reload = use_state(|| 0u32);
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    {
        let products_handle = products.clone();
        let toast_dispatch = toast_dispatch.clone();
        let search_value = (*search).clone();
        use_effect_with((search_value.clone(), *reload), move |_| {
            spawn_local(async move {
                let client = StorekeepClient::shared();
                let query = if search_value.is_empty() {
                    ListQuery::default()
                } else {
                    ListQuery::searching(&search_value)
                };
                match client.list_products(&query).await {
                    Ok(loaded) => products_handle.set(Some(loaded)),
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to load products: {err}"));
                        products_handle.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let on_delete = {
        let reload = reload.clone();
        let toast_dispatch = toast_dispatch;
        Callback::from(move |(id, name): (i64, String)| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!("Delete product \"{name}\"?"))
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
                match client.delete_product(id).await {
                    Ok(()) => {
                        toasts::success(&toast_dispatch, "Product deleted");
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to delete product: {err}"));
                    }
                }
            });
        })
    };

    let Some(products) = &*products else {
        return html! { <Loading /> };
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Products"}</h1>
                <Link<AdminRoute> to={AdminRoute::ProductNew} classes="btn btn-primary btn-sm">
                    {"New product"}
                </Link<AdminRoute>>
            </div>
            <input
                class="input input-bordered w-full max-w-sm"
                type="search"
                placeholder="Search products..."
                value={(*search).clone()}
                oninput={on_search}
            />
            if products.is_empty() {
                <p class="text-base-content/60">{"No products found."}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Price"}</th>
                            <th>{"Stock"}</th>
                            <th>{"Active"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for products.iter().map(|product| {
                            let id = product.id;
                            let name = product.name.clone();
                            let on_delete = on_delete.clone();
                            html! {
                                <tr>
                                    <td>{ &product.name }</td>
                                    <td>{format_price(product.price)}</td>
                                    <td>{product.stock}</td>
                                    <td>
                                        <span class={if product.is_active { "badge badge-success" } else { "badge badge-ghost" }}>
                                            {if product.is_active { "active" } else { "hidden" }}
                                        </span>
                                    </td>
                                    <td class="flex gap-2">
                                        <Link<AdminRoute>
                                            to={AdminRoute::ProductEdit { id }}
                                            classes="btn btn-ghost btn-xs"
                                        >
                                            {"Edit"}
                                        </Link<AdminRoute>>
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
