//! Error handling for GymBro
//!
//! This module defines the main error types used throughout the application
//! and how each one is classified before it reaches a user.

use thiserror::Error;

/// Main error type for GymBro application
#[derive(Error, Debug)]
pub enum GymBroError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Training day not found: {day_id}")]
    DayNotFound { day_id: i64 },

    #[error("Exercise not found: {exercise_id}")]
    ExerciseNotFound { exercise_id: i64 },

    #[error("Invalid callback data: {0}")]
    InvalidCallback(#[from] crate::models::actions::ActionParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for GymBro operations
pub type Result<T> = std::result::Result<T, GymBroError>;

/// How an error is reported back to the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Store failure: generic "try again" notice, pending flow abandoned
    Store,
    /// A day or exercise that no longer exists or belongs to someone else
    Referential,
    /// Malformed user input
    Input,
    /// Transport or process level failure
    Other,
}

impl GymBroError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            GymBroError::Database(_) => false,
            GymBroError::Migration(_) => false,
            GymBroError::Telegram(_) => true,
            GymBroError::Config(_) => false,
            GymBroError::ConfigLoad(_) => false,
            GymBroError::DayNotFound { .. } => false,
            GymBroError::ExerciseNotFound { .. } => false,
            GymBroError::InvalidCallback(_) => false,
            GymBroError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GymBroError::Database(_) => ErrorSeverity::Critical,
            GymBroError::Migration(_) => ErrorSeverity::Critical,
            GymBroError::Config(_) => ErrorSeverity::Critical,
            GymBroError::ConfigLoad(_) => ErrorSeverity::Critical,
            GymBroError::DayNotFound { .. } => ErrorSeverity::Warning,
            GymBroError::ExerciseNotFound { .. } => ErrorSeverity::Warning,
            GymBroError::InvalidCallback(_) => ErrorSeverity::Warning,
            GymBroError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Classify the error for the user-facing reply
    pub fn kind(&self) -> ErrorKind {
        match self {
            GymBroError::Database(_) | GymBroError::Migration(_) => ErrorKind::Store,
            GymBroError::DayNotFound { .. }
            | GymBroError::ExerciseNotFound { .. }
            | GymBroError::InvalidCallback(_) => ErrorKind::Referential,
            GymBroError::InvalidInput(_) => ErrorKind::Input,
            _ => ErrorKind::Other,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
