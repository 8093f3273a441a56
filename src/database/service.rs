//! Database service layer
//!
//! This module provides a high-level interface to database operations

use chrono::{DateTime, Utc};
use tracing::debug;
use crate::database::{DatabasePool, DayRepository, ExerciseRepository, LogRepository};
use crate::models::*;
use crate::utils::errors::GymBroError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub days: DayRepository,
    pub exercises: ExerciseRepository,
    pub logs: LogRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            days: DayRepository::new(pool.clone()),
            exercises: ExerciseRepository::new(pool.clone()),
            logs: LogRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a training day for a user
    pub async fn create_day(&self, user_id: i64, day_name: String) -> Result<Day, GymBroError> {
        self.days.create(CreateDayRequest { user_id, day_name }).await
    }

    /// Get a user's day or fail with `DayNotFound`
    pub async fn get_user_day(&self, user_id: i64, day_id: i64) -> Result<Day, GymBroError> {
        self.days.find_for_user(day_id, user_id).await?
            .ok_or(GymBroError::DayNotFound { day_id })
    }

    /// Get a user's exercise or fail with `ExerciseNotFound`
    pub async fn get_user_exercise(&self, user_id: i64, exercise_id: i64) -> Result<Exercise, GymBroError> {
        self.exercises.find_for_user(exercise_id, user_id).await?
            .ok_or(GymBroError::ExerciseNotFound { exercise_id })
    }

    /// Delete a user's day with everything under it
    pub async fn delete_user_day(&self, user_id: i64, day_id: i64) -> Result<(Day, CascadeReport), GymBroError> {
        let day = self.get_user_day(user_id, day_id).await?;
        let report = self.days.delete_cascade(day.day_id).await?;
        Ok((day, report))
    }

    /// Create an exercise and its first session in one transaction
    pub async fn create_exercise_with_logs(
        &self,
        day_id: i64,
        exercise_name: String,
        sets: &[SetEntry],
        logged_at: DateTime<Utc>,
    ) -> Result<Exercise, GymBroError> {
        let mut tx = self.pool.begin().await?;

        let exercise = ExerciseRepository::insert(
            &mut *tx,
            CreateExerciseRequest { day_id, exercise_name },
        ).await?;
        let inserted = LogRepository::insert_batch(&mut *tx, exercise.exercise_id, sets, logged_at).await?;

        tx.commit().await?;

        debug!(day_id = day_id, exercise_id = exercise.exercise_id, sets = inserted, "Exercise created with first session");
        Ok(exercise)
    }

    /// Append a session to an existing exercise
    pub async fn log_session(&self, exercise_id: i64, sets: &[SetEntry], logged_at: DateTime<Utc>) -> Result<u64, GymBroError> {
        self.logs.append(exercise_id, sets, logged_at).await
    }

    /// Check the underlying pool
    pub async fn health_check(&self) -> Result<(), GymBroError> {
        crate::database::health_check(&self.pool).await
    }
}
