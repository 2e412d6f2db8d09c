//! Tests for the session lifecycle.
//!
//! The manager is driven against a stub API and an in-memory token slot,
//! checking what gets persisted (and when) across login, restore, and
//! logout.

use crate::api::AuthApi;
use crate::error::ApiError;
use crate::session::{SessionError, SessionManager};
use crate::storage::{MemoryStorage, TokenStorage};
use async_trait::async_trait;
use futures::executor::block_on;
use shared::models::{RegisterRequest, TokenResponse, User};
use std::cell::Cell;
use std::rc::Rc;

struct StubApi {
    login: Result<TokenResponse, ApiError>,
    profile: Result<User, ApiError>,
    profile_calls: Rc<Cell<u32>>,
}

impl StubApi {
    fn new(login: Result<TokenResponse, ApiError>, profile: Result<User, ApiError>) -> Self {
        Self {
            login,
            profile,
            profile_calls: Rc::new(Cell::new(0)),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for StubApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<TokenResponse, ApiError> {
        self.login.clone()
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        self.profile.clone()
    }

    async fn current_user_with(&self, _token: &str) -> Result<User, ApiError> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        self.profile.clone()
    }

    async fn register_admin(&self, _data: &RegisterRequest) -> Result<User, ApiError> {
        self.profile.clone()
    }
}

fn user(is_admin: bool) -> User {
    User {
        id: 1,
        email: "one@example.com".to_string(),
        username: "one".to_string(),
        full_name: None,
        is_admin,
        is_active: true,
        created_at: String::new(),
    }
}

fn token() -> TokenResponse {
    TokenResponse {
        access_token: "fresh-token".to_string(),
        token_type: "bearer".to_string(),
    }
}

fn unauthorized() -> ApiError {
    ApiError::Request {
        status: 401,
        message: "Could not validate credentials".to_string(),
    }
}

#[test]
fn admin_login_persists_token_and_returns_authenticated_state() {
    let storage = Rc::new(MemoryStorage::default());
    let api = StubApi::new(Ok(token()), Ok(user(true)));
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let state = block_on(manager.login("one", "pw")).unwrap();
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("fresh-token"));
    assert_eq!(storage.get(), Some("fresh-token".to_string()));
}

#[test]
fn non_admin_login_persists_nothing() {
    let storage = Rc::new(MemoryStorage::default());
    let api = StubApi::new(Ok(token()), Ok(user(false)));
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let err = block_on(manager.login("one", "pw")).unwrap_err();
    assert_eq!(err, SessionError::NotAdmin);
    assert_eq!(storage.get(), None);
}

#[test]
fn failed_profile_fetch_after_login_persists_nothing() {
    let storage = Rc::new(MemoryStorage::default());
    let api = StubApi::new(Ok(token()), Err(unauthorized()));
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let err = block_on(manager.login("one", "pw")).unwrap_err();
    assert!(matches!(err, SessionError::Api(_)));
    assert_eq!(storage.get(), None);
}

#[test]
fn rejected_credentials_surface_the_backend_message() {
    let storage = Rc::new(MemoryStorage::default());
    let api = StubApi::new(Err(unauthorized()), Ok(user(true)));
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let err = block_on(manager.login("one", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Could not validate credentials");
    assert_eq!(storage.get(), None);
}

#[test]
fn restore_without_a_token_settles_without_network_traffic() {
    let storage = Rc::new(MemoryStorage::default());
    let api = StubApi::new(Ok(token()), Ok(user(true)));
    let profile_calls = Rc::clone(&api.profile_calls);
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let (state, notice) = block_on(manager.restore());
    assert!(!state.is_loading);
    assert!(!state.is_authenticated());
    assert!(notice.is_none());
    assert_eq!(profile_calls.get(), 0);
}

#[test]
fn restore_with_a_valid_admin_token_authenticates() {
    let storage = Rc::new(MemoryStorage::with_token("stored-token"));
    let api = StubApi::new(Ok(token()), Ok(user(true)));
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let (state, notice) = block_on(manager.restore());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("stored-token"));
    assert!(notice.is_none());
    assert_eq!(storage.get(), Some("stored-token".to_string()));
}

#[test]
fn restore_with_a_rejected_token_clears_it() {
    let storage = Rc::new(MemoryStorage::with_token("stale-token"));
    let api = StubApi::new(Ok(token()), Err(unauthorized()));
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let (state, notice) = block_on(manager.restore());
    assert!(!state.is_authenticated());
    assert!(!state.is_loading);
    assert_eq!(storage.get(), None);
    match notice {
        Some(SessionError::Api(err)) => assert!(err.is_unauthorized()),
        other => panic!("expected an API notice, got {other:?}"),
    }
}

#[test]
fn restore_with_a_non_admin_token_clears_it() {
    let storage = Rc::new(MemoryStorage::with_token("shopper-token"));
    let api = StubApi::new(Ok(token()), Ok(user(false)));
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let (state, notice) = block_on(manager.restore());
    assert!(!state.is_authenticated());
    assert_eq!(storage.get(), None);
    assert_eq!(notice, Some(SessionError::NotAdmin));
}

#[test]
fn logout_clears_storage_and_is_idempotent() {
    let storage = Rc::new(MemoryStorage::with_token("stored-token"));
    let api = StubApi::new(Ok(token()), Ok(user(true)));
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let state = manager.logout();
    assert!(!state.is_authenticated());
    assert_eq!(storage.get(), None);

    let state = manager.logout();
    assert!(!state.is_authenticated());
    assert_eq!(storage.get(), None);

    // A restore after logout stays logged out and reports nothing.
    let (state, notice) = block_on(manager.restore());
    assert!(!state.is_authenticated());
    assert!(notice.is_none());
}

#[test]
fn register_does_not_establish_a_session() {
    let storage = Rc::new(MemoryStorage::default());
    let api = StubApi::new(Ok(token()), Ok(user(true)));
    let manager = SessionManager::new(api, Rc::clone(&storage));

    let request = RegisterRequest {
        email: "new@example.com".to_string(),
        username: "new".to_string(),
        password: "pw".to_string(),
        full_name: None,
    };
    let created = block_on(manager.register(&request)).unwrap();
    assert!(created.is_admin);
    assert_eq!(storage.get(), None);
}
