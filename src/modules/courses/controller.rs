use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::courses::model::{Course, ProgressResponse};
use crate::modules::courses::service::{CourseService, validate_enrollment};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

/// List the courses the authenticated student is enrolled in.
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Enrolled courses", body = Vec<Course>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Students only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_my_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let student_id = auth_user.user_id()?;
    let courses = CourseService::get_courses_for_student(&state.db, student_id).await?;
    Ok(Json(courses))
}

/// Return the authenticated student's progress in a specific course.
///
/// The pipeline is linear: resolve the course (404 on absence), validate
/// enrollment (400 with message), then delegate to the progress
/// computation. The student role gate runs as route middleware before
/// this handler.
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/progress",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Progress for the authenticated student", body = ProgressResponse),
        (status = 400, description = "Student is not enrolled in this course", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Students only", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course_progress(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<ProgressResponse>, AppError> {
    let student_id = auth_user.user_id()?;

    let course = CourseService::get_course_by_id(&state.db, course_id).await?;

    validate_enrollment(&state.db, student_id, course.id).await?;

    let progress = CourseService::get_progress_for_student(&state.db, course.id, student_id).await?;

    Ok(Json(ProgressResponse { progress }))
}
