//! Student models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student. The link to a user account is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub class_name: String,
    pub user_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "9A")]
    pub class_name: String,
    pub user_id: Option<i32>,
}

/// All fields are optional; only provided fields will be updated.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub class_name: Option<String>,
    pub user_id: Option<i32>,
}
