use crate::api::StorekeepClient;
use crate::forms::slug::slugify;
use crate::models::toasts::{self, ToastState};
use crate::routes::AdminRoute;
use shared::models::CategoryPayload;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[function_component(CategoryFormPage)]
pub fn category_form_page() -> Html {
    let name = use_state(String::new);
    let slug = use_state(String::new);
    let description = use_state(String::new);
    let saving = use_state(|| false);
    let navigator = use_navigator();
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    let on_name_input = {
        let name = name.clone();
        let slug = slug.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                slug.set(slugify(&value));
                name.set(value);
            }
        })
    };

    let on_slug_input = {
        let slug = slug.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                slug.set(input.value());
            }
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(input.value());
            }
        })
    };

    let onsubmit = {
        let name = name.clone();
        let slug = slug.clone();
        let description = description.clone();
        let saving = saving.clone();
        let toast_dispatch = toast_dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = CategoryPayload {
                name: (*name).clone(),
                slug: (*slug).clone(),
                description: Some((*description).clone()).filter(|text| !text.is_empty()),
                image_url: None,
            };
            saving.set(true);
            let saving_ref = saving.clone();
            let toast_dispatch = toast_dispatch.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.create_category(&payload).await {
                    Ok(_) => {
                        toasts::success(&toast_dispatch, "Category created");
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&AdminRoute::Categories);
                        }
                    }
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to create category: {err}"));
                    }
                }
                saving_ref.set(false);
            });
        })
    };

    let disable_submit = (*name).is_empty() || (*slug).is_empty() || *saving;

    html! {
        <div class="space-y-4 max-w-xl">
            <h1 class="text-2xl font-bold">{"New category"}</h1>
            <form class="space-y-4" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="name">
                        <span class="label-text">{"Name"}</span>
                    </label>
                    <input
                        id="name"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="slug">
                        <span class="label-text">{"Slug"}</span>
                    </label>
                    <input
                        id="slug"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*slug).clone()}
                        oninput={on_slug_input}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="description">
                        <span class="label-text">{"Description"}</span>
                    </label>
                    <textarea
                        id="description"
                        class="textarea textarea-bordered"
                        rows="3"
                        value={(*description).clone()}
                        oninput={on_description_input}
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        {if *saving { "Saving..." } else { "Create category" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
