//! Configuration constants for Quoteshelf

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "quoteshelf";
}

/// Provider-related configuration
pub mod providers {
    /// Default Forismatic API server
    pub const FORISMATIC_DEFAULT_SERVER: &str = "https://api.forismatic.com";

    /// Path of the quote endpoint on the Forismatic server
    pub const FORISMATIC_API_PATH: &str = "/api/1.0/";

    /// Fixed API key sent with every getQuote request
    pub const FORISMATIC_API_KEY: &str = "457653";

    /// Default quote language
    pub const DEFAULT_LANGUAGE: &str = "en";
}

/// Network configuration
pub mod network {
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("quoteshelf/", env!("CARGO_PKG_VERSION"));

    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}
