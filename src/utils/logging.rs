//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the GymBro application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{GymBroError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.level)
            .map_err(|e| GymBroError::Config(format!("Invalid log filter: {}", e)))?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| GymBroError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log rejected input for a pending step
pub fn log_rejected_input(user_id: i64, step: &str, attempts: u32, reason: &str) {
    debug!(
        user_id = user_id,
        step = step,
        attempts = attempts,
        reason = reason,
        "Pending step input rejected"
    );
}

/// Log a store failure that abandoned a user's flow
pub fn log_store_failure(user_id: i64, operation: &str, error: &GymBroError) {
    error!(
        user_id = user_id,
        operation = operation,
        severity = %error.severity(),
        error = %error,
        "Store operation failed"
    );
}

/// Log a reference to a day or exercise that could not be resolved
pub fn log_missing_reference(user_id: i64, error: &GymBroError) {
    warn!(
        user_id = user_id,
        error = %error,
        "Referenced entity not found"
    );
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, rows: u64, duration_ms: u64) {
    debug!(
        operation = operation,
        table = table,
        rows = rows,
        duration_ms = duration_ms,
        "Database operation completed"
    );
}
