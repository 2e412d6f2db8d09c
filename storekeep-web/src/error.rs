//! Client-side error normalization.
//!
//! Every failure surfaced by the API layer carries a human-readable message
//! via `Display`; pages show it in a toast without further mapping.

use shared::models::ErrorBody;
use thiserror::Error;

/// A normalized API failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure: the request never produced a response.
    #[error("Unable to reach the server: {0}")]
    Network(String),

    /// The backend declared success but the body was not the promised shape.
    #[error("Invalid response from server: {0}")]
    Decode(String),

    /// Non-2xx response. The message is the backend's `detail` field when
    /// present, otherwise a generic fallback; the status is preserved for
    /// callers that need to distinguish 401 from 500.
    #[error("{message}")]
    Request {
        /// Original HTTP status code.
        status: u16,
        /// Displayable failure reason.
        message: String,
    },

    /// Client-side pre-flight rejection; no network round trip happened.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Build a [`ApiError::Request`] from a non-2xx response body.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| "Request failed".to_string());
        ApiError::Request { status, message }
    }

    /// The HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_becomes_the_message() {
        let error = ApiError::from_response(404, r#"{"detail":"Product not found"}"#);
        assert_eq!(
            error,
            ApiError::Request {
                status: 404,
                message: "Product not found".to_string()
            }
        );
        assert_eq!(error.to_string(), "Product not found");
    }

    #[test]
    fn unparseable_body_falls_back_to_generic_message() {
        let error = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(error.to_string(), "Request failed");
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn json_body_without_detail_falls_back() {
        let error = ApiError::from_response(500, r#"{"error":"boom"}"#);
        assert_eq!(error.to_string(), "Request failed");
    }

    #[test]
    fn unauthorized_is_detected_by_status() {
        assert!(ApiError::from_response(401, "{}").is_unauthorized());
        assert!(!ApiError::from_response(403, "{}").is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
    }
}
