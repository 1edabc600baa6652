use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{Course, CourseProgress};
use crate::utils::errors::AppError;

/// Error message surfaced when a student queries a course they are not
/// enrolled in.
pub const NOT_ENROLLED_MESSAGE: &str = "Student is not enrolled in this course.";

/// Check whether a student is enrolled in a course. A course with no
/// enrollments yields `false`, not an error.
#[instrument(skip(db))]
pub async fn is_enrolled(db: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<bool, AppError> {
    let enrolled = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM enrollments
            WHERE course_id = $1 AND student_id = $2
        )
        "#,
    )
    .bind(course_id)
    .bind(student_id)
    .fetch_one(db)
    .await
    .context("Failed to check enrollment")
    .map_err(AppError::database)?;

    Ok(enrolled)
}

/// Guard: fail with a 400 carrying [`NOT_ENROLLED_MESSAGE`] unless the
/// student is enrolled in the course.
#[instrument(skip(db))]
pub async fn validate_enrollment(
    db: &PgPool,
    student_id: Uuid,
    course_id: Uuid,
) -> Result<(), AppError> {
    if !is_enrolled(db, student_id, course_id).await? {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "{}",
            NOT_ENROLLED_MESSAGE
        )));
    }

    Ok(())
}

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, created_at, updated_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch course by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_courses_for_student(
        db: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.title, c.description, c.created_at, c.updated_at
            FROM courses c
            INNER JOIN enrollments e ON e.course_id = c.id
            WHERE e.student_id = $1
            ORDER BY c.title
            "#,
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch enrolled courses")
        .map_err(AppError::database)?;

        Ok(courses)
    }

    /// Compute a student's progress within a course: completed lesson
    /// count over the course's total lesson count.
    #[instrument(skip(db))]
    pub async fn get_progress_for_student(
        db: &PgPool,
        course_id: Uuid,
        student_id: Uuid,
    ) -> Result<CourseProgress, AppError> {
        let progress = sqlx::query_as::<_, CourseProgress>(
            r#"
            SELECT
                COUNT(lc.lesson_id) AS completed,
                COUNT(l.id) AS total
            FROM lessons l
            LEFT JOIN lesson_completions lc
                ON lc.lesson_id = l.id AND lc.student_id = $2
            WHERE l.course_id = $1
            "#,
        )
        .bind(course_id)
        .bind(student_id)
        .fetch_one(db)
        .await
        .context("Failed to compute course progress")
        .map_err(AppError::database)?;

        Ok(progress)
    }
}
