//! JWT claim structures for session tokens.

use gradebook_core::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `user_id`: Id of the authenticated user
/// - `role`: The user's role at issue time
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub user_id: i32,
    pub role: UserRole,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: i64,
}

/// The authenticated caller, as established by a verified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Identity {
    pub user_id: i32,
    pub role: UserRole,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}
