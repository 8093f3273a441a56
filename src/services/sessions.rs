//! Session aggregation
//!
//! A session is the run of log rows sharing one timestamp. Rows come from the
//! store newest first, so the leading run is the last session and the run
//! after it is the previous one.

use chrono::{DateTime, Utc};
use crate::models::LogEntry;
use crate::utils::helpers::format_weight;

/// One logged session of an exercise
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub logged_at: DateTime<Utc>,
    /// Taken from the session's first row
    pub reps: i64,
    pub weights: Vec<f64>,
}

impl Session {
    fn from_rows(rows: &[LogEntry]) -> Option<Self> {
        let first = rows.first()?;
        Some(Self {
            logged_at: first.logged_at,
            reps: first.reps,
            weights: rows.iter().map(|row| row.weight).collect(),
        })
    }

    /// `<reps> <weight> <weight> ...`, e.g. `3 80 85 90`
    pub fn render(&self) -> String {
        std::iter::once(self.reps.to_string())
            .chain(self.weights.iter().map(|&w| format_weight(w)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The two most recent sessions of an exercise
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionComparison {
    pub last: Option<Session>,
    pub previous: Option<Session>,
}

/// Build the last/previous pair from rows ordered by timestamp descending
pub fn last_two_sessions(logs: &[LogEntry]) -> SessionComparison {
    let mut runs = logs
        .chunk_by(|a, b| a.logged_at == b.logged_at)
        .filter_map(Session::from_rows);

    SessionComparison {
        last: runs.next(),
        previous: runs.next(),
    }
}
