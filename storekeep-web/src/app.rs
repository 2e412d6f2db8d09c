use crate::api::StorekeepClient;
use crate::models::app_state::SessionState;
use crate::models::toasts::{self, ToastState};
use crate::routes::AdminRoute;
use crate::session::{SessionError, SessionManager};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_session, session_dispatch) = use_store::<SessionState>();
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    {
        let session_dispatch = session_dispatch.clone();
        let toast_dispatch = toast_dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = StorekeepClient::shared();
                let manager = SessionManager::new(client.clone(), client.storage());
                let (state, notice) = manager.restore().await;
                match notice {
                    Some(err @ SessionError::NotAdmin) => {
                        toasts::error(&toast_dispatch, err.to_string());
                    }
                    Some(SessionError::Api(err)) => {
                        web_sys::console::error_1(
                            &format!("Session restore failed: {err}").into(),
                        );
                    }
                    None => {}
                }
                session_dispatch.set(state);
            });
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <crate::components::toaster::Toaster />
            <Switch<AdminRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
