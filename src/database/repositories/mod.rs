//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod day;
pub mod exercise;
pub mod log;

// Re-export repositories
pub use day::DayRepository;
pub use exercise::ExerciseRepository;
pub use log::LogRepository;
