//! Test database helper utilities

use std::path::Path;
use std::sync::Once;
use chrono::{DateTime, Utc};
use gymbro::database::{create_pool, run_migrations, DatabaseConfig, DatabasePool, DatabaseService};
use gymbro::services::ServiceFactory;
use gymbro::WorkoutService;

static INIT: Once = Once::new();

/// Test database with migrations applied
pub struct TestDatabase {
    pub pool: DatabasePool,
    pub service: DatabaseService,
}

impl TestDatabase {
    /// Private in-memory database
    pub async fn new() -> Self {
        Self::with_config(DatabaseConfig::in_memory()).await
    }

    /// Database file inside `dir`, created on first connect
    pub async fn on_disk(dir: &Path) -> Self {
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.join("workouts.db").display()),
            ..DatabaseConfig::default()
        };
        Self::with_config(config).await
    }

    async fn with_config(config: DatabaseConfig) -> Self {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        });

        let pool = create_pool(&config).await.expect("Failed to create test pool");
        run_migrations(&pool).await.expect("Failed to run migrations");

        Self {
            service: DatabaseService::new(pool.clone()),
            pool,
        }
    }

    /// Workout service sharing this database
    pub fn workout_service(&self) -> WorkoutService {
        ServiceFactory::new(self.pool.clone()).workout_service
    }

    pub async fn count(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows");
        count
    }

    /// Move every log row of an exercise to `logged_at`
    pub async fn backdate_logs(&self, exercise_id: i64, logged_at: DateTime<Utc>) {
        sqlx::query("UPDATE logs SET logged_at = ? WHERE exercise_id = ?")
            .bind(logged_at)
            .bind(exercise_id)
            .execute(&self.pool)
            .await
            .expect("Failed to backdate logs");
    }
}
