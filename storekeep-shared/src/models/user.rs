use serde::{Deserialize, Serialize};

/// A user account as reported by the backend.
///
/// This is an immutable snapshot: the session layer replaces it wholesale
/// on every refresh and never mutates individual fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's email address.
    pub email: String,

    /// The user's username.
    pub username: String,

    /// Optional display name.
    #[serde(default)]
    pub full_name: Option<String>,

    /// Whether the account is flagged as an administrator.
    pub is_admin: bool,

    /// Whether the account is active. Deactivated users cannot log in.
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// ISO-8601 creation timestamp, kept verbatim as sent by the backend.
    #[serde(default)]
    pub created_at: String,
}

fn default_active() -> bool {
    true
}

/// Bearer token issued by `POST /auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// The opaque bearer token.
    pub access_token: String,

    /// Token scheme, always `bearer` in practice.
    pub token_type: String,
}

/// Request body for the registration endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The new account's email address.
    pub email: String,

    /// The new account's username.
    pub username: String,

    /// The new account's password. Transient; never stored client-side.
    pub password: String,

    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Partial update payload for `PUT /users/{id}`.
///
/// Unset fields are omitted from the request body so the backend leaves
/// them untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    /// Activate or deactivate the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Grant or revoke administrator access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "email": "staff@example.com",
            "username": "staff",
            "full_name": "Staff Member",
            "is_admin": true,
            "is_active": true,
            "created_at": "2024-03-01T09:30:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "staff");
        assert_eq!(user.full_name.as_deref(), Some("Staff Member"));
        assert!(user.is_admin);
        assert!(user.is_active);
    }

    #[test]
    fn user_tolerates_missing_optional_fields() {
        // /auth/me omits is_active and created_at on some backend versions.
        let json = r#"{
            "id": 1,
            "email": "a@b.c",
            "username": "a",
            "is_admin": false
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name, None);
        assert!(user.is_active);
        assert!(user.created_at.is_empty());
    }

    #[test]
    fn token_response_deserializes() {
        let json = r#"{"access_token":"abc123","token_type":"bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc123");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn register_request_omits_absent_full_name() {
        let request = RegisterRequest {
            email: "new@example.com".to_string(),
            username: "new".to_string(),
            password: "secret".to_string(),
            full_name: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("full_name"));
    }

    #[test]
    fn user_update_serializes_only_set_fields() {
        let update = UserUpdate {
            is_active: Some(false),
            is_admin: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"is_active":false}"#);
    }
}
