//! The app-wide session store.

use shared::models::User;
use yewdux::Store;

/// The current session, shared across every view.
///
/// Invariant: `user` is only ever set together with `token`, and only for
/// administrator accounts — use the constructors rather than building the
/// struct by hand. `is_loading` is true only while the persisted token is
/// being validated at startup.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct SessionState {
    /// The bearer token, mirrored from durable storage.
    pub token: Option<String>,
    /// The authenticated admin profile.
    pub user: Option<User>,
    /// True only during the initial session restoration.
    pub is_loading: bool,
}

impl Default for SessionState {
    /// The restoring state: nothing known yet, validation in flight.
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: true,
        }
    }
}

impl SessionState {
    /// A settled, unauthenticated session.
    pub fn logged_out() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: false,
        }
    }

    /// A settled, authenticated session. Token and user are set together;
    /// there is no observable state with one but not the other.
    pub fn authenticated(token: String, user: User) -> Self {
        debug_assert!(user.is_admin, "non-admin users are never retained");
        Self {
            token: Some(token),
            user: Some(user),
            is_loading: false,
        }
    }

    /// Whether a signed-in admin is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: 1,
            email: "admin@example.com".to_string(),
            username: "admin".to_string(),
            full_name: None,
            is_admin: true,
            is_active: true,
            created_at: String::new(),
        }
    }

    #[test]
    fn default_state_is_restoring() {
        let state = SessionState::default();
        assert!(state.is_loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn constructors_settle_loading() {
        assert!(!SessionState::logged_out().is_loading);
        let state = SessionState::authenticated("tok".to_string(), admin());
        assert!(!state.is_loading);
        assert!(state.is_authenticated());
        assert_eq!(state.token.as_deref(), Some("tok"));
    }
}
