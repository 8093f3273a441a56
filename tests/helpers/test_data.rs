//! Test data helpers

use chrono::{DateTime, TimeZone, Utc};
use gymbro::models::{LogEntry, SetEntry};

pub const TEST_USER_ID: i64 = 555_000_111;
pub const OTHER_USER_ID: i64 = 555_000_222;

/// Whole-second timestamp `secs` after a fixed base
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_761_990_000 + secs, 0).unwrap()
}

pub fn sets(reps: i64, weights: &[f64]) -> Vec<SetEntry> {
    weights.iter().map(|&w| SetEntry::new(reps, w)).collect()
}

pub fn log_row(log_id: i64, logged_at: DateTime<Utc>, reps: i64, weight: f64) -> LogEntry {
    LogEntry {
        log_id,
        exercise_id: 1,
        logged_at,
        weight,
        reps,
    }
}
