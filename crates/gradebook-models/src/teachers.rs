//! Teacher models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A teacher. Always backed by a user account with the `teacher` role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Teacher {
    pub id: i32,
    pub full_name: String,
    pub room_number: String,
    pub user_id: i32,
}

/// The backing account is created with the configured temporary password and
/// the full name as its username.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub room_number: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
    #[validate(length(max = 50))]
    pub room_number: Option<String>,
}
