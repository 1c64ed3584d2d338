//! JWT utilities for authentication.
//!
//! Tokens are signed with HMAC-SHA256 using the secret from [`JwtConfig`]. Only
//! HS256 is accepted on verification: a token whose header names any other
//! algorithm is rejected as [`TokenError::Invalid`]. No clock leeway is applied,
//! so a token is valid up to and including its `exp` second.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use gradebook_config::JwtConfig;
use gradebook_core::UserRole;

use crate::claims::{Claims, Identity};
use crate::error::TokenError;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Creates an access token for `user_id` expiring `jwt_config.token_expiry` seconds from now.
pub fn create_access_token(
    user_id: i32,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, TokenError> {
    create_access_token_at(user_id, role, jwt_config, Utc::now().timestamp())
}

/// Creates an access token as if issued at `issued_at` (Unix seconds).
pub fn create_access_token_at(
    user_id: i32,
    role: UserRole,
    jwt_config: &JwtConfig,
    issued_at: i64,
) -> Result<String, TokenError> {
    let claims = Claims {
        user_id,
        role,
        exp: issued_at + jwt_config.token_expiry,
        iat: issued_at,
    };

    encode(
        &Header::new(ALGORITHM),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Encoding(e.to_string()))
}

/// Verifies a token and returns the identity it carries.
///
/// # Errors
///
/// - [`TokenError::Expired`] when the current time is past `exp`
/// - [`TokenError::Invalid`] for every other failure
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Identity, TokenError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| Identity::from(data.claims))
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}
