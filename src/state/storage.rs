//! State storage implementation
//!
//! This module keeps pending conversation steps in process memory, keyed by
//! user ID. A context exists only while a flow is waiting for input.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use super::context::ConversationContext;

/// In-memory state storage shared by all handlers
#[derive(Debug, Clone, Default)]
pub struct StateStorage {
    contexts: Arc<RwLock<HashMap<i64, ConversationContext>>>,
}

impl StateStorage {
    /// Create a new state storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Save conversation context, replacing any previous one for the user
    pub async fn save_context(&self, context: &ConversationContext) {
        let mut contexts = self.contexts.write().await;
        let replaced = contexts.insert(context.user_id, context.clone());

        debug!(user_id = context.user_id, step = context.step.name(),
               replaced = ?replaced.map(|c| c.step.name()), "Context saved");
    }

    /// Load conversation context
    pub async fn load_context(&self, user_id: i64) -> Option<ConversationContext> {
        let contexts = self.contexts.read().await;
        let context = contexts.get(&user_id).cloned();

        debug!(user_id = user_id, has_context = context.is_some(), "Context loaded");
        context
    }

    /// Delete conversation context
    pub async fn delete_context(&self, user_id: i64) -> Option<ConversationContext> {
        let mut contexts = self.contexts.write().await;
        let removed = contexts.remove(&user_id);

        if removed.is_some() {
            debug!("Deleted context for user {}", user_id);
        }

        removed
    }

    /// Get storage statistics
    pub async fn get_stats(&self) -> StorageStats {
        let contexts = self.contexts.read().await;

        let mut steps_count = HashMap::new();
        for context in contexts.values() {
            *steps_count.entry(context.step.name().to_string()).or_insert(0) += 1;
        }

        StorageStats {
            active_contexts: contexts.len(),
            steps_count,
        }
    }
}

/// Storage statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorageStats {
    pub active_contexts: usize,
    pub steps_count: HashMap<String, u32>,
}
