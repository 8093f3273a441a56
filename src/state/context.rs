//! Conversation context management
//!
//! This module tracks the step a user's multi-step input flow is waiting on,
//! together with the identifiers the step needs to finish.

use chrono::{DateTime, Utc};

/// A step waiting for the user's next free-text message
///
/// Idle is represented by the absence of a pending step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingStep {
    /// Next text is the name of a new training day
    AwaitingDayName,
    /// Next text is `<name> <reps> <weight>+` for a new exercise under the day
    AwaitingNewExerciseLine { day_id: i64 },
    /// Next text is `<reps> <weight>+` for an existing exercise
    AwaitingExistingExerciseLine { exercise_id: i64 },
}

impl PendingStep {
    /// Stable name for logs and stats
    pub fn name(&self) -> &'static str {
        match self {
            PendingStep::AwaitingDayName => "awaiting_day_name",
            PendingStep::AwaitingNewExerciseLine { .. } => "awaiting_new_exercise_line",
            PendingStep::AwaitingExistingExerciseLine { .. } => "awaiting_existing_exercise_line",
        }
    }
}

/// User conversation context
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationContext {
    /// User ID this context belongs to
    pub user_id: i64,
    /// Step waiting for input
    pub step: PendingStep,
    /// Rejected submissions for this step so far
    pub attempts: u32,
    /// When the flow was started
    pub started_at: DateTime<Utc>,
    /// When this context was last updated
    pub updated_at: DateTime<Utc>,
}

impl ConversationContext {
    /// Create a context for a freshly started flow
    pub fn new(user_id: i64, step: PendingStep) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            step,
            attempts: 0,
            started_at: now,
            updated_at: now,
        }
    }

    /// Record a rejected submission; the step itself stays the same
    pub fn record_rejection(&mut self) {
        self.attempts += 1;
        self.updated_at = Utc::now();
    }

    /// Create a summary of the context for logging
    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            user_id: self.user_id,
            step: self.step.name(),
            attempts: self.attempts,
            updated_at: self.updated_at,
        }
    }
}

/// Context summary for logging and debugging
#[derive(Debug, Clone)]
pub struct ContextSummary {
    pub user_id: i64,
    pub step: &'static str,
    pub attempts: u32,
    pub updated_at: DateTime<Utc>,
}
