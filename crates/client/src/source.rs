//! Catalog loading with fallback to the bundled demo catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_catalog::{Catalog, Product, fallback_catalog};
use storefront_core::DomainError;

/// Notice recorded when the remote catalog could not be loaded.
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load products";

/// Why a catalog load failed. Always recoverable via the fallback catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog API error ({0})")]
    Status(u16),
    #[error("failed to decode catalog: {0}")]
    Decode(String),
    #[error("invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// Supplier of the ordered product list.
///
/// Called once at startup. There is no retry and no caching beyond that.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog, CatalogLoadFailure>;
}

/// Catalog served by the catalog API (`GET {api_url}/products`).
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    api_url: String,
}

impl HttpCatalogSource {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogLoadFailure> {
        let url = self.products_url();
        tracing::info!(%url, "loading catalog");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogLoadFailure::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CatalogLoadFailure::Status(resp.status().as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| CatalogLoadFailure::Network(e.to_string()))?;
        let products: Vec<Product> =
            serde_json::from_slice(&body).map_err(|e| CatalogLoadFailure::Decode(e.to_string()))?;

        Ok(Catalog::new(products)?)
    }
}

/// Catalog served from memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    catalog: Catalog,
}

impl StaticCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogLoadFailure> {
        Ok(self.catalog.clone())
    }
}

/// Where the displayed catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    Remote,
    Fallback,
}

/// Outcome of the startup load: always a usable catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub origin: CatalogOrigin,
    /// Non-fatal notice for the display layer, set when the fallback is used.
    pub notice: Option<String>,
}

impl CatalogLoad {
    pub fn remote(catalog: Catalog) -> Self {
        Self {
            catalog,
            origin: CatalogOrigin::Remote,
            notice: None,
        }
    }

    pub fn fallback() -> Self {
        Self {
            catalog: fallback_catalog(),
            origin: CatalogOrigin::Fallback,
            notice: Some(LOAD_FAILURE_NOTICE.to_string()),
        }
    }

    pub fn from_result(result: Result<Catalog, CatalogLoadFailure>) -> Self {
        match result {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), "catalog loaded");
                Self::remote(catalog)
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed; showing demo products");
                Self::fallback()
            }
        }
    }
}

/// Load once from `source`, substituting the fallback catalog on failure.
pub async fn load_or_fallback(source: &dyn CatalogSource) -> CatalogLoad {
    CatalogLoad::from_result(source.load().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Price;

    struct FailingSource;

    #[async_trait::async_trait]
    impl CatalogSource for FailingSource {
        async fn load(&self) -> Result<Catalog, CatalogLoadFailure> {
            Err(CatalogLoadFailure::Network("connection refused".to_string()))
        }
    }

    fn small_catalog() -> Catalog {
        Catalog::new(vec![Product::new(1, "Hat", "hats", Price::from_cents(2000))]).unwrap()
    }

    #[tokio::test]
    async fn successful_load_is_remote_without_notice() {
        let source = StaticCatalogSource::new(small_catalog());
        let load = load_or_fallback(&source).await;
        assert_eq!(load.origin, CatalogOrigin::Remote);
        assert_eq!(load.catalog, small_catalog());
        assert!(load.notice.is_none());
    }

    #[tokio::test]
    async fn failed_load_uses_fallback_with_notice() {
        let load = load_or_fallback(&FailingSource).await;
        assert_eq!(load.origin, CatalogOrigin::Fallback);
        assert_eq!(load.catalog, fallback_catalog());
        assert_eq!(load.notice.as_deref(), Some(LOAD_FAILURE_NOTICE));
    }

    #[test]
    fn invalid_catalog_is_a_load_failure() {
        let err: CatalogLoadFailure = DomainError::validation("duplicate product id 1").into();
        assert!(matches!(err, CatalogLoadFailure::Invalid(_)));
        assert!(err.to_string().contains("duplicate product id 1"));
    }

    #[test]
    fn products_url_ignores_trailing_slash() {
        assert_eq!(
            HttpCatalogSource::new("http://localhost:8080/").products_url(),
            "http://localhost:8080/products"
        );
        assert_eq!(
            HttpCatalogSource::new("http://localhost:8080").products_url(),
            "http://localhost:8080/products"
        );
    }
}
