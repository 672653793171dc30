//! Quote providers
//!
//! Sources of random quotes (Forismatic today; the registry leaves room
//! for alternatives).

pub mod forismatic;
pub mod traits;

// Re-exports
pub use forismatic::ForismaticProvider;
pub use traits::QuoteProvider;

use crate::error::Result;

/// Registry of available quote providers
pub struct ProviderRegistry {
    providers: Vec<Box<dyn QuoteProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with the default providers
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Box::new(ForismaticProvider::new()?));
        Ok(registry)
    }

    /// Register a provider
    pub fn register(&mut self, provider: Box<dyn QuoteProvider>) {
        self.providers.push(provider);
    }

    /// Get a provider by ID
    pub fn get(&self, id: &str) -> Option<&dyn QuoteProvider> {
        self.providers
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.as_ref())
    }

    /// The first registered provider, used when no explicit choice is made
    pub fn default_provider(&self) -> Option<&dyn QuoteProvider> {
        self.providers.first().map(|p| p.as_ref())
    }

    /// List all provider IDs
    pub fn list_ids(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the registry has no providers
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
