//! Favourites management
//!
//! In-memory list of favourited quotes, persisted wholesale as a
//! pretty-printed JSON array. Insertion order is preserved and duplicates
//! are permitted — a quote has no identifier, so there is nothing to
//! deduplicate on. The on-disk document is purely a local snapshot of user
//! choices; last write wins, no merge with remote state.

use crate::data::storage;
use crate::data::types::Quote;
use crate::error::StoreError;
use std::path::Path;

/// Favourites data file name
const FAVOURITES_FILE: &str = "favourites.json";

/// Ordered list of favourited quotes
pub struct Favourites {
    quotes: Vec<Quote>,
    /// Whether there are unsaved changes
    dirty: bool,
}

impl Favourites {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            dirty: false,
        }
    }

    /// The well-known favourites path inside the config directory
    pub fn default_path() -> Result<std::path::PathBuf, StoreError> {
        storage::data_path(FAVOURITES_FILE)
    }

    /// Load favourites from the default storage location
    ///
    /// Strict: a missing or malformed document is an error. Use
    /// [`Favourites::load_or_default`] for the lenient startup policy.
    pub fn load() -> Result<Self, StoreError> {
        let path = storage::data_path(FAVOURITES_FILE)?;
        Self::load_from(&path)
    }

    /// Load favourites from a specific path
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        match storage::load_from::<Vec<Quote>>(path)? {
            Some(quotes) => Ok(Self {
                quotes,
                dirty: false,
            }),
            None => Err(StoreError::NotFound(path.to_path_buf())),
        }
    }

    /// Load favourites, falling back to an empty list on any failure
    ///
    /// The startup policy: a missing or undecodable document is logged and
    /// the session starts with no favourites. Never panics.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(favourites) => favourites,
            Err(StoreError::NotFound(_)) => Self::new(),
            Err(e) => {
                log::warn!("Could not load favourites, starting empty: {e}");
                Self::new()
            }
        }
    }

    /// Save favourites to the default storage location
    pub fn save(&mut self) -> Result<(), StoreError> {
        let path = storage::data_path(FAVOURITES_FILE)?;
        self.save_to(&path)
    }

    /// Save favourites to a specific path (full overwrite, atomic replace)
    pub fn save_to(&mut self, path: &Path) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }

        storage::save_to(path, &self.quotes)?;
        self.dirty = false;
        Ok(())
    }

    /// Force save to a specific path (ignore dirty flag)
    pub fn force_save_to(&mut self, path: &Path) -> Result<(), StoreError> {
        self.dirty = true;
        self.save_to(path)
    }

    /// Check if there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append a quote to the end of the list
    ///
    /// Duplicates are allowed; idempotence per displayed quote is the
    /// caller's concern (the session membership flag).
    pub fn add(&mut self, quote: Quote) {
        self.quotes.push(quote);
        self.dirty = true;
    }

    /// All favourites in insertion order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Iterate over favourites in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    /// Number of favourites
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl Default for Favourites {
    fn default() -> Self {
        Self::new()
    }
}
