use courseflow::utils::password::hash_password;
#[allow(unused_imports)]
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[allow(dead_code)]
pub struct TestCourse {
    pub id: Uuid,
    pub title: String,
}

/// Create a test user with the given role.
/// role should be one of: "admin", "teacher", "student"
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
    role: &str,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO users (first_name, last_name, email, password, role)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind("Test")
    .bind("User")
    .bind(email)
    .bind(hashed)
    .bind(role)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role: role.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_course(tx: &mut Transaction<'_, Postgres>, title: &str) -> TestCourse {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO courses (title, description)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(Some("Test course description"))
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestCourse {
        id,
        title: title.to_string(),
    }
}

#[allow(dead_code)]
pub async fn enroll_student(
    tx: &mut Transaction<'_, Postgres>,
    course_id: Uuid,
    student_id: Uuid,
) {
    sqlx::query(
        r#"
        INSERT INTO enrollments (course_id, student_id)
        VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(course_id)
    .bind(student_id)
    .execute(&mut **tx)
    .await
    .unwrap();
}

#[allow(dead_code)]
pub async fn create_test_lesson(
    tx: &mut Transaction<'_, Postgres>,
    course_id: Uuid,
    title: &str,
    position: i32,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO lessons (course_id, title, position)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(course_id)
    .bind(title)
    .bind(position)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn complete_lesson(
    tx: &mut Transaction<'_, Postgres>,
    lesson_id: Uuid,
    student_id: Uuid,
) {
    sqlx::query(
        r#"
        INSERT INTO lesson_completions (lesson_id, student_id)
        VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(lesson_id)
    .bind(student_id)
    .execute(&mut **tx)
    .await
    .unwrap();
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_course_title() -> String {
    format!("Course {}", Uuid::new_v4())
}
