//! Services module
//!
//! This module contains business logic services

pub mod reply;
pub mod sessions;
pub mod workout;

// Re-export commonly used services
pub use reply::{Delivery, InlineButton, Keyboard, Reply, Response};
pub use sessions::{last_two_sessions, Session, SessionComparison};
pub use workout::WorkoutService;

use crate::database::{DatabasePool, DatabaseService};
use crate::state::{ScenarioManager, StateStorage, StorageStats};

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub workout_service: WorkoutService,
    pub state_storage: StateStorage,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(pool: DatabasePool) -> Self {
        let state_storage = StateStorage::new();
        let workout_service = WorkoutService::new(
            DatabaseService::new(pool),
            ScenarioManager::new(state_storage.clone()),
        );

        Self {
            workout_service,
            state_storage,
        }
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let database_healthy = self.workout_service.database().health_check().await.is_ok();
        let pending_steps = self.state_storage.get_stats().await;

        ServiceHealthStatus {
            database_healthy,
            pending_steps,
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub database_healthy: bool,
    pub pending_steps: StorageStats,
}

impl ServiceHealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.database_healthy
    }

    /// Get list of unhealthy services
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.database_healthy {
            issues.push("Database connection failed".to_string());
        }

        issues
    }
}
