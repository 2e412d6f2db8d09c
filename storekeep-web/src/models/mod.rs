//! Client-side state stores.

pub mod app_state;
pub mod toasts;
