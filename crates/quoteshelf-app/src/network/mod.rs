//! Network operations
//!
//! HTTP client configuration shared by all providers.

pub mod client;

// Re-export commonly used types
pub use client::HttpClient;
