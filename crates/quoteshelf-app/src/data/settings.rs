//! Application settings management
//!
//! User preferences. Loaded leniently: a missing or empty file yields
//! defaults, unknown fields are ignored.

use crate::config::providers::DEFAULT_LANGUAGE;
use crate::data::storage;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Settings data file name
const SETTINGS_FILE: &str = "settings.json";

/// Settings file format version
const SETTINGS_VERSION: u32 = 1;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Language requested from the quote endpoint ("en" or "ru")
    #[serde(default = "default_language")]
    pub language: String,

    /// Fetch a quote automatically on startup
    #[serde(default = "default_true")]
    pub auto_fetch: bool,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            language: default_language(),
            auto_fetch: true,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from the default storage location
    pub fn load() -> Result<Self, StoreError> {
        match storage::load::<Settings>(SETTINGS_FILE)? {
            Some(settings) => Ok(settings),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, StoreError> {
        match storage::load_from::<Settings>(path)? {
            Some(settings) => Ok(settings),
            None => Ok(Self::default()),
        }
    }

    /// Save settings to the default storage location
    pub fn save(&self) -> Result<(), StoreError> {
        storage::save(SETTINGS_FILE, self)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), StoreError> {
        storage::save_to(path, self)
    }
}
