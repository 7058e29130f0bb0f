//! Catalog HTTP Client
//!
//! Plain GET requests against the PokeAPI-shaped REST endpoints. No retry,
//! no caching; the only policy is an optional per-request timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

use super::error::{CatalogError, Result};
use super::models::{RawDetail, RawListPage, RawTypePage};

// ============================================================================
// Source Trait
// ============================================================================

/// Anything that can answer the three catalog queries.
///
/// Implemented by [`CatalogClient`] for the real API; tests plug in
/// in-memory sources.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// `GET /pokemon?limit={limit}`
    async fn fetch_listing(&self, limit: usize) -> Result<RawListPage>;

    /// `GET /pokemon/{id}`
    async fn fetch_detail(&self, id: u32) -> Result<RawDetail>;

    /// `GET /type/{tag}`
    async fn fetch_type(&self, tag: &str) -> Result<RawTypePage>;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// reqwest-backed catalog client.
pub struct CatalogClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| CatalogError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Self::new(&api.base_url, api.request_timeout())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        log::debug!("GET {url} {query:?}");

        let response = self.http_client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} returned {status}");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_listing(&self, limit: usize) -> Result<RawListPage> {
        let url = format!("{}/pokemon", self.base_url);
        self.get_json(&url, &[("limit", limit.to_string())]).await
    }

    async fn fetch_detail(&self, id: u32) -> Result<RawDetail> {
        let url = format!("{}/pokemon/{}", self.base_url, id);
        self.get_json(&url, &[]).await
    }

    async fn fetch_type(&self, tag: &str) -> Result<RawTypePage> {
        let url = format!("{}/type/{}", self.base_url, tag);
        self.get_json(&url, &[]).await
    }
}
