//! Exercise model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub exercise_id: i64,
    pub day_id: i64,
    pub exercise_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    pub day_id: i64,
    pub exercise_name: String,
}
