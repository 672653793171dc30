//! Application controller
//!
//! Owns the favourites list, settings, and provider registry, and
//! processes commands from the front-end through a single crossbeam
//! channel. Commands are handled strictly one at a time — the fetch is
//! the only blocking operation, and it completes before the next command
//! is dispatched, so favourites and session state are never touched from
//! two paths at once.

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crossbeam_channel::Receiver;

use crate::data::{Favourites, Settings};
use crate::providers::ProviderRegistry;

use super::state::{AppCommand, AppSnapshot};

pub struct AppController {
    cmd_rx: Receiver<AppCommand>,
    shared_state: Arc<Mutex<AppSnapshot>>,
    registry: ProviderRegistry,
    settings: Settings,
    favourites: Favourites,
    favourites_path: PathBuf,
}

impl AppController {
    pub fn new(
        cmd_rx: Receiver<AppCommand>,
        shared_state: Arc<Mutex<AppSnapshot>>,
        registry: ProviderRegistry,
        settings: Settings,
        favourites: Favourites,
        favourites_path: PathBuf,
    ) -> Self {
        Self {
            cmd_rx,
            shared_state,
            registry,
            settings,
            favourites,
            favourites_path,
        }
    }

    /// Run the controller event loop (blocking, call from a dedicated thread)
    pub fn run(&mut self) {
        self.publish_favourites();

        loop {
            match self.cmd_rx.recv() {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                }
                // All senders dropped: the front-end is gone
                Err(crossbeam_channel::RecvError) => break,
            }
        }

        // Persist on the way out even without an explicit Shutdown
        self.persist();
    }

    /// Handle a single command. Returns true if the loop should exit.
    fn handle_command(&mut self, cmd: AppCommand) -> bool {
        match cmd {
            AppCommand::Shutdown => {
                self.persist();
                return true;
            }
            AppCommand::FetchQuote => self.fetch_quote(),
            AppCommand::AddFavourite => self.add_favourite(),
            AppCommand::Persist => self.persist(),
        }
        false
    }

    fn fetch_quote(&mut self) {
        {
            let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());
            state.is_fetching = true;
            state.status_text = Cow::Borrowed("Fetching...");
        }

        let result = match self.registry.default_provider() {
            Some(provider) => provider.fetch_quote(&self.settings.language),
            None => {
                let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());
                state.is_fetching = false;
                state.last_error = Some("No quote provider registered".to_string());
                state.status_text = Cow::Borrowed("Fetch failed");
                return;
            }
        };

        let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());
        state.is_fetching = false;
        match result {
            Ok(quote) => {
                state.current = Some(quote);
                state.current_added = false;
                state.last_error = None;
                state.status_text = Cow::Borrowed("Ready");
            }
            Err(e) => {
                // The previously displayed quote stays in place
                log::warn!("Quote fetch failed: {e}");
                state.last_error = Some(e.to_string());
                state.status_text = Cow::Borrowed("Fetch failed");
            }
        }
    }

    fn add_favourite(&mut self) {
        let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());

        if state.current_added {
            // Already shelved this display; adding again is a no-op
            return;
        }
        let Some(quote) = state.current.clone() else {
            return;
        };

        self.favourites.add(quote);
        state.current_added = true;
        state.favourites = self.favourites.quotes().to_vec();
        state.status_text = Cow::Borrowed("Added to favourites");
    }

    fn persist(&mut self) {
        if let Err(e) = self.favourites.save_to(&self.favourites_path) {
            // Non-fatal: prior on-disk state is untouched, no retry
            log::error!("Could not save favourites: {e}");
            let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());
            state.last_error = Some(e.to_string());
            state.status_text = Cow::Borrowed("Save failed");
        }
    }

    fn publish_favourites(&self) {
        let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());
        state.favourites = self.favourites.quotes().to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::Quote;
    use crate::error::FetchError;
    use crate::providers::QuoteProvider;
    use crossbeam_channel::bounded;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("quoteshelf_ctrl_test_{}.json", id))
    }

    struct MockProvider;

    impl QuoteProvider for MockProvider {
        fn name(&self) -> &'static str {
            "Mock"
        }

        fn id(&self) -> &'static str {
            "mock"
        }

        fn fetch_quote(&self, _lang: &str) -> Result<Quote, FetchError> {
            Ok(Quote::new("mock quote", "Mock Author"))
        }
    }

    struct FailingProvider;

    impl QuoteProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "Failing"
        }

        fn id(&self) -> &'static str {
            "failing"
        }

        fn fetch_quote(&self, _lang: &str) -> Result<Quote, FetchError> {
            Err(FetchError::Status(500))
        }
    }

    fn controller_with(provider: Box<dyn QuoteProvider>, path: PathBuf) -> AppController {
        let (_tx, rx) = bounded(1);
        let mut registry = ProviderRegistry::new();
        registry.register(provider);
        AppController::new(
            rx,
            Arc::new(Mutex::new(AppSnapshot::default())),
            registry,
            Settings::default(),
            Favourites::new(),
            path,
        )
    }

    fn snapshot(controller: &AppController) -> AppSnapshot {
        controller.shared_state.lock().unwrap().clone()
    }

    #[test]
    fn test_fetch_installs_quote_and_resets_flag() {
        let mut controller = controller_with(Box::new(MockProvider), temp_path());

        // Flag set from a previous display must be cleared by the fetch
        controller.shared_state.lock().unwrap().current_added = true;

        controller.handle_command(AppCommand::FetchQuote);

        let state = snapshot(&controller);
        assert_eq!(state.current.as_ref().unwrap().quote_text, "mock quote");
        assert!(!state.current_added);
        assert!(state.last_error.is_none());
        assert!(!state.is_fetching);
    }

    #[test]
    fn test_fetch_failure_keeps_previous_quote() {
        let mut controller = controller_with(Box::new(FailingProvider), temp_path());

        let previous = Quote::new("previous", "Someone");
        controller.shared_state.lock().unwrap().current = Some(previous.clone());

        controller.handle_command(AppCommand::FetchQuote);

        let state = snapshot(&controller);
        assert_eq!(state.current, Some(previous));
        assert!(state.last_error.as_ref().unwrap().contains("500"));
    }

    #[test]
    fn test_fetch_failure_does_not_reset_flag() {
        let mut controller = controller_with(Box::new(FailingProvider), temp_path());

        {
            let mut state = controller.shared_state.lock().unwrap();
            state.current = Some(Quote::new("previous", ""));
            state.current_added = true;
        }

        controller.handle_command(AppCommand::FetchQuote);

        // The displayed quote didn't change, so its membership didn't either
        assert!(snapshot(&controller).current_added);
    }

    #[test]
    fn test_add_favourite_appends_once_per_display() {
        let mut controller = controller_with(Box::new(MockProvider), temp_path());

        controller.handle_command(AppCommand::FetchQuote);
        controller.handle_command(AppCommand::AddFavourite);
        controller.handle_command(AppCommand::AddFavourite);

        let state = snapshot(&controller);
        assert_eq!(controller.favourites.len(), 1);
        assert_eq!(state.favourites.len(), 1);
        assert!(state.current_added);
    }

    #[test]
    fn test_add_favourite_without_current_is_noop() {
        let mut controller = controller_with(Box::new(MockProvider), temp_path());

        controller.handle_command(AppCommand::AddFavourite);

        assert!(controller.favourites.is_empty());
        assert!(!snapshot(&controller).current_added);
    }

    #[test]
    fn test_refetch_allows_adding_again() {
        let mut controller = controller_with(Box::new(MockProvider), temp_path());

        controller.handle_command(AppCommand::FetchQuote);
        controller.handle_command(AppCommand::AddFavourite);
        controller.handle_command(AppCommand::FetchQuote);
        controller.handle_command(AppCommand::AddFavourite);

        // Same quote twice is fine — duplicates are permitted
        assert_eq!(controller.favourites.len(), 2);
    }

    #[test]
    fn test_persist_writes_favourites_file() {
        let path = temp_path();
        let mut controller = controller_with(Box::new(MockProvider), path.clone());

        controller.handle_command(AppCommand::FetchQuote);
        controller.handle_command(AppCommand::AddFavourite);
        controller.handle_command(AppCommand::Persist);

        let reloaded = Favourites::load_from(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.quotes()[0].quote_text, "mock quote");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_shutdown_persists_and_exits() {
        let path = temp_path();
        let mut controller = controller_with(Box::new(MockProvider), path.clone());

        controller.handle_command(AppCommand::FetchQuote);
        controller.handle_command(AppCommand::AddFavourite);

        let exit = controller.handle_command(AppCommand::Shutdown);
        assert!(exit);
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_run_processes_queued_commands() {
        let path = temp_path();
        let (tx, rx) = bounded(8);
        let mut registry = ProviderRegistry::new();
        registry.register(Box::new(MockProvider));
        let shared_state = Arc::new(Mutex::new(AppSnapshot::default()));

        let mut controller = AppController::new(
            rx,
            shared_state.clone(),
            registry,
            Settings::default(),
            Favourites::new(),
            path.clone(),
        );

        tx.send(AppCommand::FetchQuote).unwrap();
        tx.send(AppCommand::AddFavourite).unwrap();
        tx.send(AppCommand::Shutdown).unwrap();
        controller.run();

        let state = shared_state.lock().unwrap().clone();
        assert_eq!(state.favourites.len(), 1);
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_startup_publishes_loaded_favourites() {
        let path = temp_path();

        // Seed a favourites file, then run a controller that loaded it
        {
            let mut favourites = Favourites::new();
            favourites.add(Quote::new("persisted", "Author"));
            favourites.save_to(&path).unwrap();
        }

        let (tx, rx) = bounded(1);
        let shared_state = Arc::new(Mutex::new(AppSnapshot::default()));
        let mut controller = AppController::new(
            rx,
            shared_state.clone(),
            ProviderRegistry::new(),
            Settings::default(),
            Favourites::load_or_default(&path),
            path.clone(),
        );

        tx.send(AppCommand::Shutdown).unwrap();
        controller.run();

        let state = shared_state.lock().unwrap().clone();
        assert_eq!(state.favourites.len(), 1);
        assert_eq!(state.favourites[0].quote_text, "persisted");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_fetch_with_empty_registry_reports_error() {
        let (_tx, rx) = bounded(1);
        let mut controller = AppController::new(
            rx,
            Arc::new(Mutex::new(AppSnapshot::default())),
            ProviderRegistry::new(),
            Settings::default(),
            Favourites::new(),
            temp_path(),
        );

        controller.handle_command(AppCommand::FetchQuote);

        let state = controller.shared_state.lock().unwrap().clone();
        assert!(state.last_error.is_some());
        assert!(state.current.is_none());
    }
}
