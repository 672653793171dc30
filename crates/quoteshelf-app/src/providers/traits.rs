//! Quote provider trait
//!
//! Defines the interface that all quote sources must implement.

use crate::data::types::Quote;
use crate::error::FetchError;

/// A source of random quotes
///
/// Implementations fetch a single quote per call. Every call is a fresh,
/// independent request: no retry, no caching of previous results.
pub trait QuoteProvider: Send + Sync {
    /// Display name for the provider (e.g., "Forismatic")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "forismatic")
    fn id(&self) -> &'static str;

    /// Fetch one random quote in the given language
    fn fetch_quote(&self, lang: &str) -> Result<Quote, FetchError>;
}
