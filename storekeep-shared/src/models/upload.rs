use serde::{Deserialize, Serialize};

/// Response from `POST /upload`: where the stored file is served from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// Public URL of the uploaded file.
    pub url: String,
}
