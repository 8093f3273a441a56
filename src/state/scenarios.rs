//! Conversation scenarios implementation
//!
//! Each user is either idle or waiting on exactly one pending step. Starting a
//! flow always replaces whatever step was pending before.

use tracing::debug;
use super::context::{ConversationContext, PendingStep};
use super::storage::StateStorage;

/// How a pending step ended when the user answered it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Input was accepted and stored
    Completed,
    /// Input could not be parsed; the step stays armed
    Rejected,
    /// Storage failed or the referenced record is gone
    Failed,
}

/// Next pending step after an outcome, `None` meaning idle
pub fn next_state(step: PendingStep, outcome: StepOutcome) -> Option<PendingStep> {
    match outcome {
        StepOutcome::Rejected => Some(step),
        StepOutcome::Completed | StepOutcome::Failed => None,
    }
}

/// Scenario manager for handling per-user pending steps
#[derive(Debug, Clone, Default)]
pub struct ScenarioManager {
    storage: StateStorage,
}

impl ScenarioManager {
    pub fn new(storage: StateStorage) -> Self {
        Self { storage }
    }

    /// Arm a step for a user, overwriting any previous one
    pub async fn begin(&self, user_id: i64, step: PendingStep) -> ConversationContext {
        let context = ConversationContext::new(user_id, step);
        self.storage.save_context(&context).await;
        debug!(user_id = user_id, step = step.name(), "Scenario started");
        context
    }

    /// Step the user is currently waiting on
    pub async fn current(&self, user_id: i64) -> Option<ConversationContext> {
        self.storage.load_context(user_id).await
    }

    /// Return the user to idle
    pub async fn reset(&self, user_id: i64) -> bool {
        self.storage.delete_context(user_id).await.is_some()
    }

    /// Apply an outcome to the user's pending step
    pub async fn resolve(&self, mut context: ConversationContext, outcome: StepOutcome) -> Option<PendingStep> {
        let next = next_state(context.step, outcome);

        match next {
            Some(_) => {
                context.record_rejection();
                debug!(user_id = context.user_id, step = context.step.name(),
                       attempts = context.attempts, "Step re-armed");
                self.storage.save_context(&context).await;
            }
            None => {
                debug!(user_id = context.user_id, step = context.step.name(),
                       outcome = ?outcome, "Scenario finished");
                self.storage.delete_context(context.user_id).await;
            }
        }

        next
    }
}
