//! GymBro Telegram Bot
//!
//! A conversational workout log. Users keep training days, attach exercises
//! to them and log sets per session; the bot compares the last session with
//! the previous one.

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{GymBroError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::{ServiceFactory, WorkoutService};
pub use state::{ScenarioManager, StateStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
