//! Frontend configuration.
//!
//! Connectivity settings resolved at compile time, overridable through
//! environment variables at build.

const DEFAULT_API_BASE_URL: &str = "/api";

/// Frontend configuration for backend connectivity.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL every API path is joined onto.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("STOREKEEP_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
