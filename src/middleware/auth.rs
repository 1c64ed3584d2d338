use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use gradebook_auth::{Identity, TokenError, verify_token};
use gradebook_config::JwtConfig;
use gradebook_core::{AppError, UserRole};

use crate::state::AppState;

/// The authenticated caller.
///
/// Extracted from the request extensions when an earlier stage already verified the
/// token, otherwise from the `Authorization` header.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn user_id(&self) -> i32 {
        self.0.user_id
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }
}

/// Maps a token failure to the 401 the client sees.
pub fn token_error_to_app_error(err: TokenError) -> AppError {
    match err {
        TokenError::Encoding(_) => AppError::internal(err),
        TokenError::Invalid | TokenError::Expired => AppError::unauthorized(err.to_string()),
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))
}

pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<Identity, AppError> {
    let token = bearer_token(headers)?;
    verify_token(token, jwt_config).map_err(token_error_to_app_error)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(*auth_user);
        }

        authenticate(&parts.headers, &state.jwt_config).map(AuthUser)
    }
}

/// Authentication stage: rejects the request unless it carries a valid token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = authenticate(req.headers(), &state.jwt_config)?;
    req.extensions_mut().insert(AuthUser(identity));
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "middleware-secret".to_string(),
            token_expiry: 3600,
            uses_fallback_secret: false,
        }
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header() {
        let err = authenticate(&HeaderMap::new(), &config()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_non_bearer_scheme() {
        let err = authenticate(&headers("Basic dXNlcjpwYXNz"), &config()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.public_message(), "Invalid authorization header format");
    }

    #[test]
    fn test_valid_token() {
        let token = gradebook_auth::create_access_token(5, UserRole::Teacher, &config()).unwrap();
        let identity = authenticate(&headers(&format!("Bearer {}", token)), &config()).unwrap();
        assert_eq!(identity.user_id, 5);
        assert_eq!(identity.role, UserRole::Teacher);
    }

    #[test]
    fn test_expired_token_message() {
        let issued_at = chrono::Utc::now().timestamp() - 7200;
        let token =
            gradebook_auth::create_access_token_at(5, UserRole::Teacher, &config(), issued_at)
                .unwrap();
        let err = authenticate(&headers(&format!("Bearer {}", token)), &config()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.public_message(), "Token expired");
    }

    #[test]
    fn test_encoding_failure_is_internal() {
        let err = token_error_to_app_error(TokenError::Encoding("bad key".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
