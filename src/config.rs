//! Client configuration.
//!
//! The original frontend hard-coded the gateway origin in a global constant;
//! here it is an explicit value provided to components via Leptos context so
//! deployments can point the widget at a different gateway without code
//! edits.

/// Gateway origin used when no configuration is provided.
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Configuration for the REST client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin of the API gateway, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config pointing at the given gateway origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
