//! Session lifecycle: restore, login, register, logout.
//!
//! The manager is explicitly constructed and injectable — pages build one
//! over the shared client and browser storage, tests over stubs. It owns
//! every transition of the session state machine:
//!
//! `Restoring -> {Unauthenticated, Authenticated}` once at startup, then
//! `Unauthenticated -> Authenticated` only via a successful admin login and
//! back via logout or any detected loss of authorization. Login and logout
//! are atomic from the caller's perspective: the returned state carries
//! token and user together or not at all.

use thiserror::Error;

use crate::api::AuthApi;
use crate::error::ApiError;
use crate::models::app_state::SessionState;
use crate::storage::TokenStorage;
use shared::models::{RegisterRequest, User};

/// Why a stored or submitted credential was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The account authenticated but is not an administrator. Requires
    /// discarding credentials, not just displaying a message.
    #[error("Unauthorized access - Admin only")]
    NotAdmin,

    /// The backend rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Owns the authentication lifecycle over an API and a token slot.
#[derive(Debug)]
pub struct SessionManager<A, S> {
    api: A,
    storage: S,
}

impl<A: AuthApi, S: TokenStorage> SessionManager<A, S> {
    /// Build a manager over an API client and a token slot.
    pub fn new(api: A, storage: S) -> Self {
        Self { api, storage }
    }

    /// Validate any persisted token at startup.
    ///
    /// Always settles: the returned state never has `is_loading` set. On
    /// any failure the token is discarded — the session fails open to
    /// logged-out, never to a stale authenticated state. The accompanying
    /// error, when present, says why the token was dropped.
    pub async fn restore(&self) -> (SessionState, Option<SessionError>) {
        let Some(token) = self.storage.get() else {
            return (SessionState::logged_out(), None);
        };
        match self.api.current_user().await {
            Ok(user) if user.is_admin => (SessionState::authenticated(token, user), None),
            Ok(_) => {
                self.storage.clear();
                (SessionState::logged_out(), Some(SessionError::NotAdmin))
            }
            Err(err) => {
                self.storage.clear();
                (SessionState::logged_out(), Some(SessionError::Api(err)))
            }
        }
    }

    /// Authenticate with credentials.
    ///
    /// The token is persisted only after the profile is confirmed to be an
    /// administrator; a non-admin login leaves storage and state untouched.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionState, SessionError> {
        let token = self.api.login(username, password).await?;
        let user = self.api.current_user_with(&token.access_token).await?;
        if !user.is_admin {
            return Err(SessionError::NotAdmin);
        }
        self.storage.set(&token.access_token);
        Ok(SessionState::authenticated(token.access_token, user))
    }

    /// Create an administrator account.
    ///
    /// Does not establish a session; the caller logs in separately, and
    /// success does not imply the new account can authenticate yet.
    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        self.api.register_admin(data).await
    }

    /// Drop the session. Purely local, idempotent, and infallible: clears
    /// durable storage and returns the logged-out state regardless of
    /// network reachability.
    pub fn logout(&self) -> SessionState {
        self.storage.clear();
        SessionState::logged_out()
    }
}
