//! Training day model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named, user-owned training routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Day {
    pub day_id: i64,
    pub user_id: i64,
    pub day_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDayRequest {
    pub user_id: i64,
    pub day_name: String,
}

/// Rows removed by deleting a day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    pub exercises_deleted: u64,
    pub logs_deleted: u64,
}
