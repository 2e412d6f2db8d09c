use crate::models::toasts::{ToastKind, ToastState};
use yew::prelude::*;
use yewdux::prelude::use_store;

/// Renders the toast queue in the top-right corner. Toasts auto-dismiss
/// after a few seconds; clicking one dismisses it immediately.
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let (state, dispatch) = use_store::<ToastState>();

    html! {
        <div class="toast toast-top toast-end z-50">
            { for state.toasts.iter().map(|toast| {
                let id = toast.id;
                let dispatch = dispatch.clone();
                let dismiss = Callback::from(move |_: MouseEvent| {
                    dispatch.reduce_mut(|state| state.toasts.retain(|toast| toast.id != id));
                });
                let class = match toast.kind {
                    ToastKind::Success => "alert alert-success cursor-pointer",
                    ToastKind::Error => "alert alert-error cursor-pointer",
                };
                html! {
                    <div key={toast.id} {class} onclick={dismiss}>
                        <span>{ &toast.message }</span>
                    </div>
                }
            }) }
        </div>
    }
}
