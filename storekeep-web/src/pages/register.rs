use crate::api::StorekeepClient;
use crate::routes::AdminRoute;
use crate::session::SessionManager;
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

/// Creates an admin account. Registration does not sign the account in;
/// on success the user is sent to the login page.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let email = use_state(String::new);
    let username = use_state(String::new);
    let full_name = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let email_handle = email.clone();
        let username_handle = username.clone();
        let full_name_handle = full_name.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = RegisterRequest {
                email: (*email_handle).clone(),
                username: (*username_handle).clone(),
                full_name: Some((*full_name_handle).clone()).filter(|name| !name.is_empty()),
                password: (*password_handle).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = StorekeepClient::shared();
                let manager = SessionManager::new(client.clone(), client.storage());
                match manager.register(&request).await {
                    Ok(_) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&AdminRoute::Login);
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(format!("Registration failed: {err}")));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit =
        (*email).is_empty() || (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create admin account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={bind_input(&username)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="full_name">
                            <span class="label-text">{"Full name (optional)"}</span>
                        </label>
                        <input
                            id="full_name"
                            class="input input-bordered"
                            type="text"
                            value={(*full_name).clone()}
                            oninput={bind_input(&full_name)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Creating..." } else { "Create account" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Already have an account? "}
                        <Link<AdminRoute> to={AdminRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<AdminRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
