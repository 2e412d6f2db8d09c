//! Form-side helpers: slug derivation, image list bookkeeping, and URL checks.

pub mod image_url;
pub mod images;
pub mod slug;
