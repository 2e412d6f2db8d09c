use crate::api::StorekeepClient;
use crate::models::app_state::SessionState;
use crate::models::toasts::{self, ToastState};
use crate::routes::AdminRoute;
use crate::session::SessionManager;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_selector, use_store};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let username = use_selector(|state: &SessionState| {
        state
            .user
            .as_ref()
            .map(|user| user.username.clone())
            .unwrap_or_default()
    });
    let (_session, session_dispatch) = use_store::<SessionState>();
    let (_toasts, toast_dispatch) = use_store::<ToastState>();
    let navigator = use_navigator();

    let on_logout = {
        Callback::from(move |_: MouseEvent| {
            let client = StorekeepClient::shared();
            let manager = SessionManager::new(client.clone(), client.storage());
            session_dispatch.set(manager.logout());
            toasts::success(&toast_dispatch, "Logged out successfully");
            if let Some(navigator) = &navigator {
                navigator.push(&AdminRoute::Login);
            }
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-300 px-4">
            <Link<AdminRoute> to={AdminRoute::Dashboard} classes="btn btn-ghost text-lg">
                {"Storekeep Admin"}
            </Link<AdminRoute>>
            <div class="flex items-center gap-3">
                <span class="text-sm text-base-content/80">{ (*username).clone() }</span>
                <button class="btn btn-outline btn-sm" onclick={on_logout}>
                    {"Logout"}
                </button>
            </div>
        </nav>
    }
}
