//! Role-gate middleware for Axum.
//!
//! The gate comes in two shapes:
//! 1. A pure predicate ([`is_student`]) over the authenticated claims
//! 2. Layer-based middleware ([`require_student`]) for whole route trees
//!
//! The predicate never errors: callers with a missing or unrecognized role
//! value simply fail the gate.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Parse a role string into a [`UserRole`]. Unknown values yield `None`
/// rather than an error so the gate can treat them as a plain denial.
pub fn parse_role(role_str: &str) -> Option<UserRole> {
    match role_str {
        "admin" => Some(UserRole::Admin),
        "teacher" => Some(UserRole::Teacher),
        "student" => Some(UserRole::Student),
        _ => None,
    }
}

/// Role-gate predicate: true iff the authenticated caller's role is
/// exactly `student`.
pub fn is_student(auth_user: &AuthUser) -> bool {
    parse_role(&auth_user.0.role) == Some(UserRole::Student)
}

/// Check that the authenticated user has the given role, for use in
/// controller logic.
pub fn check_role(auth_user: &AuthUser, required_role: UserRole) -> Result<(), AppError> {
    if parse_role(&auth_user.0.role) != Some(required_role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required role: {:?}",
            required_role
        )));
    }

    Ok(())
}

/// Middleware that restricts a route tree to authenticated students.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::role::require_student;
///
/// let student_routes = Router::new()
///     .route("/courses", get(list_courses))
///     .layer(middleware::from_fn_with_state(state.clone(), require_student));
/// ```
pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let auth_user = match AuthUser::from_request_parts(&mut parts, &state).await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    if !is_student(&auth_user) {
        return AppError::forbidden(anyhow::anyhow!(
            "Access denied. Student role required."
        ))
        .into_response();
    }

    let req = Request::from_parts(parts, body);
    next.run(req).await
}
