//! Error types for Quoteshelf
//!
//! `FetchError` covers the network boundary, `StoreError` the persistence
//! boundary. `AppError` wraps both for callers that cross them.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while fetching a quote from the remote endpoint
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, invalid URL)
    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    /// The server answered, but not with a success status
    #[error("Quote server returned HTTP {0}")]
    Status(u16),

    /// The response body did not match the expected quote schema
    #[error("Malformed quote payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure while loading or saving the local favourites store
#[derive(Error, Debug)]
pub enum StoreError {
    /// File I/O failure with an ErrorKind-specific message
    #[error("Storage error: {0}")]
    Storage(String),

    /// No document exists at the expected path
    #[error("No data file at {0:?}")]
    NotFound(PathBuf),

    /// The document exists but is not valid JSON for the expected shape
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Serialization to JSON failed before anything was written
    #[error("Failed to encode data: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Fetch(FetchError::Network(e))
    }
}

/// Result type alias for Quoteshelf app services
pub type Result<T> = std::result::Result<T, AppError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    format!("Network error: {e}")
}
