//! Shared application state and commands
//!
//! `AppCommand` is the command type sent by the front-end.
//! `AppSnapshot` is the shared state the front-end renders from.

use std::borrow::Cow;

use crate::data::types::Quote;

/// Commands sent by the front-end
pub enum AppCommand {
    /// Fetch a new random quote and make it current
    FetchQuote,
    /// Append the current quote to the favourites list (once per display)
    AddFavourite,
    /// Write the favourites list to disk
    Persist,
    /// Persist and exit the controller loop
    Shutdown,
}

/// Snapshot of app state — shared between controller and front-end
#[derive(Clone, Debug)]
pub struct AppSnapshot {
    /// The currently displayed quote, if any has been fetched yet
    pub current: Option<Quote>,
    /// True once the current quote was added to favourites this display.
    /// Reset on every successful fetch; never persisted.
    pub current_added: bool,
    /// Favourites view for rendering (the controller owns the real list)
    pub favourites: Vec<Quote>,
    /// Last error from fetching or persisting
    pub last_error: Option<String>,
    /// True while a fetch is in flight
    pub is_fetching: bool,
    pub status_text: Cow<'static, str>,
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self {
            current: None,
            current_added: false,
            favourites: Vec::new(),
            last_error: None,
            is_fetching: false,
            status_text: Cow::Borrowed("Ready"),
        }
    }
}
