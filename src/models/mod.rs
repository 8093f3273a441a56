//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod actions;
pub mod day;
pub mod exercise;
pub mod log;

// Re-export commonly used models
pub use actions::{ActionParseError, CallbackAction, MenuButton};
pub use day::{CascadeReport, CreateDayRequest, Day};
pub use exercise::{CreateExerciseRequest, Exercise};
pub use log::{LogEntry, SetEntry};
