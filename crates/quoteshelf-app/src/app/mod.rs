//! Application controller and shared state

pub mod controller;
pub mod state;

pub use controller::AppController;
pub use state::{AppCommand, AppSnapshot};
