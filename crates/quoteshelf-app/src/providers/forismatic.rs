//! Forismatic API provider
//!
//! Implementation of `QuoteProvider` for the Forismatic random-quote
//! service (<https://forismatic.com/en/api/>).

use crate::config::providers::{
    FORISMATIC_API_KEY, FORISMATIC_API_PATH, FORISMATIC_DEFAULT_SERVER,
};
use crate::data::types::Quote;
use crate::error::{FetchError, Result};
use crate::network::HttpClient;

use super::traits::QuoteProvider;

use serde::Deserialize;

// =============================================================================
// Internal API response type (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmQuote {
    quote_text: String,
    #[serde(default)]
    quote_author: String,
    #[serde(default)]
    sender_name: String,
    #[serde(default)]
    sender_link: String,
    #[serde(default)]
    quote_link: String,
}

impl From<FmQuote> for Quote {
    fn from(fm: FmQuote) -> Self {
        // The API pads quoteText with trailing whitespace
        Quote::new(fm.quote_text.trim(), fm.quote_author.trim())
            .with_sender(fm.sender_name.trim(), fm.sender_link.trim())
            .with_quote_link(fm.quote_link.trim())
    }
}

// =============================================================================
// ForismaticProvider
// =============================================================================

/// Forismatic API provider
///
/// Issues a single unauthenticated GET per quote against the Forismatic
/// endpoint with the fixed `method`/`key`/`format` parameters.
pub struct ForismaticProvider {
    client: HttpClient,
    base_url: String,
}

impl ForismaticProvider {
    /// Create a provider using the default server
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: FORISMATIC_DEFAULT_SERVER.to_string(),
        })
    }

    /// Create a provider with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }

    /// Full URL of the quote endpoint
    fn url(&self) -> String {
        format!("{}{}", self.base_url, FORISMATIC_API_PATH)
    }
}

impl QuoteProvider for ForismaticProvider {
    fn name(&self) -> &'static str {
        "Forismatic"
    }

    fn id(&self) -> &'static str {
        "forismatic"
    }

    fn fetch_quote(&self, lang: &str) -> std::result::Result<Quote, FetchError> {
        let fm: FmQuote = self.client.get_json(
            &self.url(),
            &[
                ("method", "getQuote"),
                ("key", FORISMATIC_API_KEY),
                ("format", "json"),
                ("lang", lang),
            ],
        )?;
        Ok(fm.into())
    }
}

// =============================================================================
// Tests
// =============================================================================
