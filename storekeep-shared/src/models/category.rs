use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier for the category.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// URL-safe identifier.
    pub slug: String,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,

    /// Optional banner image.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Create/update body for the category endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPayload {
    /// Display name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional banner image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
