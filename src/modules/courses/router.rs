use crate::modules::courses::controller::{get_course_progress, get_my_courses};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_my_courses))
        .route("/{course_id}/progress", get(get_course_progress))
}
