use crate::api::StorekeepClient;
use crate::models::app_state::SessionState;
use crate::models::toasts::{self, ToastState};
use crate::routes::AdminRoute;
use crate::session::{SessionError, SessionManager};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_session, session_dispatch) = use_store::<SessionState>();
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    let onsubmit = {
        let username_handle = username.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let session_dispatch = session_dispatch;
        let toast_dispatch = toast_dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let username_value = (*username_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let session_dispatch = session_dispatch.clone();
            let toast_dispatch = toast_dispatch.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = StorekeepClient::shared();
                let manager = SessionManager::new(client.clone(), client.storage());
                match manager.login(&username_value, &password_value).await {
                    Ok(state) => {
                        session_dispatch.set(state);
                        toasts::success(&toast_dispatch, "Login successful");
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&AdminRoute::Dashboard);
                        }
                    }
                    Err(SessionError::NotAdmin) => {
                        error_ref.set(Some("You do not have admin privileges".to_string()));
                    }
                    Err(SessionError::Api(err)) => {
                        error_ref.set(Some(format!("Login failed: {err}")));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Admin sign in"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
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
                            oninput={on_username_change}
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
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Need an admin account? "}
                        <Link<AdminRoute> to={AdminRoute::Register} classes="link link-primary">
                            {"Register"}
                        </Link<AdminRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
