//! Reusable view components.

pub mod loading;
pub mod toaster;
