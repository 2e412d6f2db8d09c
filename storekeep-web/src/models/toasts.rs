//! Toast notifications, shared through a yewdux store.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yewdux::{Dispatch, Store};

const TOAST_DISMISS_MS: u32 = 4_000;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Green: a mutation landed.
    Success,
    /// Red: something failed; the message is the error's display string.
    Error,
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier used for dismissal.
    pub id: u32,
    /// Visual flavor.
    pub kind: ToastKind,
    /// Displayable text.
    pub message: String,
}

/// The queue of visible toasts.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct ToastState {
    /// Currently visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    next_id: u32,
}

/// Show a toast and schedule its auto-dismissal.
pub fn push_toast(dispatch: &Dispatch<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = 0;
    dispatch.reduce_mut(|state| {
        id = state.next_id;
        state.next_id = state.next_id.wrapping_add(1);
        state.toasts.push(Toast { id, kind, message });
    });
    let dispatch = dispatch.clone();
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        dispatch.reduce_mut(|state| state.toasts.retain(|toast| toast.id != id));
    });
}

/// Show a success toast.
pub fn success(dispatch: &Dispatch<ToastState>, message: impl Into<String>) {
    push_toast(dispatch, ToastKind::Success, message);
}

/// Show an error toast.
pub fn error(dispatch: &Dispatch<ToastState>, message: impl Into<String>) {
    push_toast(dispatch, ToastKind::Error, message);
}
