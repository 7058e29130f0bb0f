//! Catalog Error Types
//!
//! Every failure the catalog can hit while talking to the remote API.
//! Variants carry owned strings so results can travel through the UI
//! event channel and be cloned into view state.

use thiserror::Error;

/// Catalog operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Transport failure: connection refused, DNS, TLS, timeout.
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body did not match the expected JSON shape.
    #[error("Unexpected response: {0}")]
    Parse(String),

    /// A resource URL did not carry a positive integer identifier.
    #[error("Malformed entity url: {0}")]
    MalformedEntity(String),
}

impl CatalogError {
    /// Request failed or returned a non-success status.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }

    /// Identifier extraction or JSON shape mismatch.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::MalformedEntity(_))
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::Parse(e.to_string())
        } else if let Some(status) = e.status() {
            CatalogError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            CatalogError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
