//! Exercise repository implementation

use sqlx::{SqliteConnection, SqlitePool};
use crate::models::exercise::{CreateExerciseRequest, Exercise};
use crate::utils::errors::GymBroError;

#[derive(Debug, Clone)]
pub struct ExerciseRepository {
    pool: SqlitePool,
}

impl ExerciseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new exercise under a day
    pub async fn create(&self, request: CreateExerciseRequest) -> Result<Exercise, GymBroError> {
        let mut conn = self.pool.acquire().await?;
        Self::insert(&mut *conn, request).await
    }

    pub(crate) async fn insert(conn: &mut SqliteConnection, request: CreateExerciseRequest) -> Result<Exercise, GymBroError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (day_id, exercise_name)
            VALUES (?, ?)
            RETURNING exercise_id, day_id, exercise_name
            "#
        )
        .bind(request.day_id)
        .bind(request.exercise_name)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exercise)
    }

    /// Find exercise by ID
    pub async fn find_by_id(&self, exercise_id: i64) -> Result<Option<Exercise>, GymBroError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            "SELECT exercise_id, day_id, exercise_name FROM exercises WHERE exercise_id = ?"
        )
        .bind(exercise_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(exercise)
    }

    /// Find exercise by ID, only if its day belongs to the user
    pub async fn find_for_user(&self, exercise_id: i64, user_id: i64) -> Result<Option<Exercise>, GymBroError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT e.exercise_id, e.day_id, e.exercise_name
            FROM exercises e
            INNER JOIN training_days d ON d.day_id = e.day_id
            WHERE e.exercise_id = ? AND d.user_id = ?
            "#
        )
        .bind(exercise_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(exercise)
    }

    /// List exercises of a day in creation order
    pub async fn list_by_day(&self, day_id: i64) -> Result<Vec<Exercise>, GymBroError> {
        let exercises = sqlx::query_as::<_, Exercise>(
            "SELECT exercise_id, day_id, exercise_name FROM exercises WHERE day_id = ? ORDER BY exercise_id ASC"
        )
        .bind(day_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(exercises)
    }
}
