//! Training day repository implementation

use std::time::Instant;
use sqlx::SqlitePool;
use tracing::info;
use crate::models::day::{CascadeReport, CreateDayRequest, Day};
use crate::utils::errors::GymBroError;
use crate::utils::logging::log_database_operation;

#[derive(Debug, Clone)]
pub struct DayRepository {
    pool: SqlitePool,
}

impl DayRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new training day
    pub async fn create(&self, request: CreateDayRequest) -> Result<Day, GymBroError> {
        let day = sqlx::query_as::<_, Day>(
            r#"
            INSERT INTO training_days (user_id, day_name)
            VALUES (?, ?)
            RETURNING day_id, user_id, day_name
            "#
        )
        .bind(request.user_id)
        .bind(request.day_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(day)
    }

    /// Find day by ID
    pub async fn find_by_id(&self, day_id: i64) -> Result<Option<Day>, GymBroError> {
        let day = sqlx::query_as::<_, Day>(
            "SELECT day_id, user_id, day_name FROM training_days WHERE day_id = ?"
        )
        .bind(day_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(day)
    }

    /// Find day by ID, only if it belongs to the user
    pub async fn find_for_user(&self, day_id: i64, user_id: i64) -> Result<Option<Day>, GymBroError> {
        let day = sqlx::query_as::<_, Day>(
            "SELECT day_id, user_id, day_name FROM training_days WHERE day_id = ? AND user_id = ?"
        )
        .bind(day_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(day)
    }

    /// List a user's days in creation order
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Day>, GymBroError> {
        let days = sqlx::query_as::<_, Day>(
            "SELECT day_id, user_id, day_name FROM training_days WHERE user_id = ? ORDER BY day_id ASC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(days)
    }

    /// Delete a day together with its exercises and their logs
    ///
    /// Runs as one transaction: if any statement fails the transaction is
    /// dropped without commit and nothing is removed.
    pub async fn delete_cascade(&self, day_id: i64) -> Result<CascadeReport, GymBroError> {
        let started = Instant::now();
        let mut tx = self.pool.begin().await?;

        let exercise_ids: Vec<i64> = sqlx::query_scalar(
            "SELECT exercise_id FROM exercises WHERE day_id = ?"
        )
        .bind(day_id)
        .fetch_all(&mut *tx)
        .await?;

        let mut logs_deleted = 0;
        for exercise_id in exercise_ids.iter().copied() {
            logs_deleted += sqlx::query("DELETE FROM logs WHERE exercise_id = ?")
                .bind(exercise_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        let exercises_deleted = sqlx::query("DELETE FROM exercises WHERE day_id = ?")
            .bind(day_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let days_deleted = sqlx::query("DELETE FROM training_days WHERE day_id = ?")
            .bind(day_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if days_deleted == 0 {
            return Err(GymBroError::DayNotFound { day_id });
        }

        tx.commit().await?;

        let report = CascadeReport { exercises_deleted, logs_deleted };
        log_database_operation(
            "delete_cascade",
            "training_days",
            days_deleted + exercises_deleted + logs_deleted,
            started.elapsed().as_millis() as u64,
        );
        info!(day_id = day_id, exercises_deleted = exercises_deleted, logs_deleted = logs_deleted, "Training day deleted");

        Ok(report)
    }

    /// Count a user's days
    pub async fn count_by_user(&self, user_id: i64) -> Result<i64, GymBroError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM training_days WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
