//! State management module
//!
//! This module handles pending conversation steps and the input they accept

pub mod context;
pub mod input;
pub mod scenarios;
pub mod storage;

// Re-export commonly used state components
pub use context::{ConversationContext, ContextSummary, PendingStep};
pub use input::{InputError, NewExerciseInput, SetBatch, parse_existing_exercise_line, parse_new_exercise_line};
pub use scenarios::{ScenarioManager, StepOutcome, next_state};
pub use storage::{StateStorage, StorageStats};
