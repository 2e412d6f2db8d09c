//! Durable bearer-token storage.
//!
//! The token lives in a single named slot; absence means logged out. The
//! slot is behind a small trait so session logic can be exercised in tests
//! without a browser.

use gloo_storage::{LocalStorage, Storage};
use std::rc::Rc;

/// LocalStorage key for the admin bearer token.
pub const TOKEN_STORAGE_KEY: &str = "admin_token";

/// A single durable slot holding the bearer token.
pub trait TokenStorage {
    /// Read the stored token, if any.
    fn get(&self) -> Option<String>;
    /// Persist a token, replacing any previous one.
    fn set(&self, token: &str);
    /// Remove the stored token. A no-op when the slot is already empty.
    fn clear(&self);
}

impl<T: TokenStorage + ?Sized> TokenStorage for Rc<T> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// Browser `localStorage` implementation of the token slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn get(&self) -> Option<String> {
        LocalStorage::get(TOKEN_STORAGE_KEY).ok()
    }

    fn set(&self, token: &str) {
        if let Err(err) = LocalStorage::set(TOKEN_STORAGE_KEY, token) {
            web_sys::console::error_1(&format!("failed to persist token: {err}").into());
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }
}

/// In-memory token slot used by unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        Self(std::cell::RefCell::new(Some(token.to_string())))
    }
}

#[cfg(test)]
impl TokenStorage for MemoryStorage {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.get(), None);
        storage.set("abc");
        assert_eq!(storage.get(), Some("abc".to_string()));
        storage.clear();
        assert_eq!(storage.get(), None);
        // Clearing an empty slot stays a no-op.
        storage.clear();
        assert_eq!(storage.get(), None);
    }

    #[test]
    fn rc_delegates_to_inner_slot() {
        let storage = Rc::new(MemoryStorage::with_token("seed"));
        let handle: Rc<MemoryStorage> = Rc::clone(&storage);
        assert_eq!(handle.get(), Some("seed".to_string()));
        handle.clear();
        assert_eq!(storage.get(), None);
    }
}
