//! Set log model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One recorded set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
    pub log_id: i64,
    pub exercise_id: i64,
    pub logged_at: DateTime<Utc>,
    pub weight: f64,
    pub reps: i64,
}

/// A set waiting to be written
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub reps: i64,
    pub weight: f64,
}

impl SetEntry {
    pub fn new(reps: i64, weight: f64) -> Self {
        Self { reps, weight }
    }
}
