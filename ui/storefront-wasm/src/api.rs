//! Browser catalog client.
//!
//! Wraps `fetch` (through `gloo-net`) for the Fake Store REST API.
//! `base_url()` honours a `data-api-url` attribute on `<body>`.

use crate::dom;
use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use sf_api_types::{Product, ProductId};
use sf_catalog_client::{CatalogSource, RemoteError};

pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";

/// Determine the API base URL.
///
/// Priority: `<body data-api-url="…">` → public Fake Store API.
pub fn base_url() -> String {
    let configured = dom::window()
        .document()
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute("data-api-url"))
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .unwrap_or_default();

    if configured.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        configured
    }
}

pub struct HttpCatalog {
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// GET `path` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        if !resp.ok() {
            return Err(RemoteError::Status {
                status: resp.status(),
                url,
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, RemoteError> {
        match category {
            Some(c) => {
                let path = format!("/products/category/{}", js_sys::encode_uri_component(c));
                self.get_json(&path).await
            }
            None => self.get_json("/products").await,
        }
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, RemoteError> {
        self.get_json("/products/categories").await
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, RemoteError> {
        self.get_json(&format!("/products/{id}")).await
    }
}
