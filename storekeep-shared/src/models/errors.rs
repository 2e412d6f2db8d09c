use serde::{Deserialize, Serialize};

/// The backend's failure body: `{"detail": "..."}`.
///
/// Every non-2xx response is expected to carry this shape, but the client
/// must tolerate bodies that are not JSON at all.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable reason for the failure.
    #[serde(default)]
    pub detail: Option<String>,
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{detail}"),
            None => write!(f, "Request failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_detail_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Not found"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Not found"));
        assert_eq!(body.to_string(), "Not found");
    }

    #[test]
    fn tolerates_unrelated_json() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(body.detail, None);
        assert_eq!(body.to_string(), "Request failed");
    }
}
