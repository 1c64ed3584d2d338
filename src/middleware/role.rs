//! Role-based authorization middleware.
//!
//! Each `require_*` function is a complete access-control chain: it authenticates the
//! request (reusing an [`AuthUser`] already stored by [`super::auth::require_auth`])
//! and then checks the role.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use gradebook_core::{AppError, UserRole};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Middleware body shared by the role helpers below.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/reports", get(handler))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_roles(state, req, next, &[UserRole::Deputy]),
///     ));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &[UserRole],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_any_role(&auth_user, allowed_roles)?;

    parts.extensions.insert(auth_user);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Deputy only.
pub async fn require_deputy(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_roles(State(state), req, next, &[UserRole::Deputy])
        .await
        .unwrap_or_else(IntoResponse::into_response)
}

/// Teacher only. Used by the "my students" views, which resolve the caller to a teacher row.
pub async fn require_teacher(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_roles(State(state), req, next, &[UserRole::Teacher])
        .await
        .unwrap_or_else(IntoResponse::into_response)
}

/// Deputy or teacher: grade creation and update.
pub async fn require_grade_writer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    require_roles(State(state), req, next, &[UserRole::Deputy, UserRole::Teacher])
        .await
        .unwrap_or_else(IntoResponse::into_response)
}

/// Check if the user has any of the allowed roles.
///
/// Roles are parsed case-insensitively when the token is decoded, so this is an exact
/// enum comparison.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if allowed_roles.contains(&auth_user.role()) {
        return Ok(());
    }

    let allowed = allowed_roles
        .iter()
        .map(UserRole::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Err(AppError::forbidden(format!(
        "Access denied. Required role: {}",
        allowed
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use gradebook_auth::Identity;

    fn user(role: UserRole) -> AuthUser {
        AuthUser(Identity { user_id: 1, role })
    }

    #[test]
    fn test_teacher_on_deputy_route_is_forbidden() {
        let err = check_any_role(&user(UserRole::Teacher), &[UserRole::Deputy]).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.public_message(), "Access denied. Required role: deputy");
    }

    #[test]
    fn test_teacher_on_grade_writer_route_passes() {
        assert!(
            check_any_role(&user(UserRole::Teacher), &[UserRole::Deputy, UserRole::Teacher])
                .is_ok()
        );
    }

    #[test]
    fn test_student_never_writes_grades() {
        assert!(
            check_any_role(&user(UserRole::Student), &[UserRole::Deputy, UserRole::Teacher])
                .is_err()
        );
    }
}
