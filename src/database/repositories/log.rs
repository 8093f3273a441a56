//! Set log repository implementation

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use crate::models::log::{LogEntry, SetEntry};
use crate::utils::errors::GymBroError;

#[derive(Debug, Clone)]
pub struct LogRepository {
    pool: SqlitePool,
}

impl LogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one session of sets, all stamped with `logged_at`
    pub async fn append(&self, exercise_id: i64, sets: &[SetEntry], logged_at: DateTime<Utc>) -> Result<u64, GymBroError> {
        let mut tx = self.pool.begin().await?;
        let inserted = Self::insert_batch(&mut *tx, exercise_id, sets, logged_at).await?;
        tx.commit().await?;

        Ok(inserted)
    }

    /// Insert sets on an open connection or transaction
    pub(crate) async fn insert_batch(
        conn: &mut SqliteConnection,
        exercise_id: i64,
        sets: &[SetEntry],
        logged_at: DateTime<Utc>,
    ) -> Result<u64, GymBroError> {
        let mut inserted = 0;
        for set in sets {
            inserted += sqlx::query(
                "INSERT INTO logs (exercise_id, logged_at, weight, reps) VALUES (?, ?, ?, ?)"
            )
            .bind(exercise_id)
            .bind(logged_at)
            .bind(set.weight)
            .bind(set.reps)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        }

        Ok(inserted)
    }

    /// All logs of an exercise, most recent session first
    ///
    /// Rows of one session keep the order they were entered in.
    pub async fn list_by_exercise(&self, exercise_id: i64) -> Result<Vec<LogEntry>, GymBroError> {
        let logs = sqlx::query_as::<_, LogEntry>(
            r#"
            SELECT log_id, exercise_id, logged_at, weight, reps
            FROM logs
            WHERE exercise_id = ?
            ORDER BY logged_at DESC, log_id ASC
            "#
        )
        .bind(exercise_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    /// Count logs of an exercise
    pub async fn count_by_exercise(&self, exercise_id: i64) -> Result<i64, GymBroError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM logs WHERE exercise_id = ?")
            .bind(exercise_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
