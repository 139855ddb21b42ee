use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use sf_api_types::{Product, ProductId};
use sf_catalog_client::{CatalogSource, RemoteError};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl CatalogConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads `STOREFRONT_API_URL`, falling back to the public Fake Store API.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(&url),
            _ => Self::default(),
        }
    }
}

/// `reqwest` client for the Fake Store REST API.
pub struct FakeStoreCatalog {
    base_url: String,
    http: reqwest::Client,
}

impl FakeStoreCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| RemoteError::Transport(err.to_string()))?;
        Ok(Self {
            base_url: config.base_url,
            http,
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| RemoteError::Transport(format!("invalid base url {}: {err}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| RemoteError::Transport(format!("base url cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RemoteError> {
        let url_text = url.to_string();
        debug!(url = %url_text, "catalog request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| RemoteError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                url: url_text,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| RemoteError::Transport(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| RemoteError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl CatalogSource for FakeStoreCatalog {
    async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, RemoteError> {
        let url = match category {
            Some(category) => self.url(&["products", "category", category])?,
            None => self.url(&["products"])?,
        };
        self.get_json(url).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, RemoteError> {
        let url = self.url(&["products", "categories"])?;
        self.get_json(url).await
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, RemoteError> {
        let url = self.url(&["products", &id.to_string()])?;
        self.get_json(url).await
    }
}
