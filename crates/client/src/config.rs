//! Runtime configuration.

/// Environment variable holding the catalog API base URL.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Catalog API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";

/// Client configuration, read from the environment with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub api_url: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, so tests need not touch the real
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(API_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                tracing::debug!("{API_URL_ENV} not set; using {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            });

        Self { api_url }
    }

    /// Apply a command-line override, if one was given.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }
}
