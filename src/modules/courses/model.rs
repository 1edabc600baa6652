use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-student progress within a course: how many of the course's lessons
/// the student has completed.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CourseProgress {
    pub completed: i64,
    pub total: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgressResponse {
    pub progress: CourseProgress,
}
