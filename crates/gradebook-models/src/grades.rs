//! Grade models and DTOs.
//!
//! Grades use the 1..=5 scale and are recorded per quarter (1..=4). Several grades
//! may exist for the same student, subject and quarter.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Grade {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    pub value: i32,
    pub quarter: i32,
}

/// A grade joined with its subject's name.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct GradeWithSubject {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    pub subject_name: String,
    pub value: i32,
    pub quarter: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGradeDto {
    pub student_id: i32,
    pub subject_id: i32,
    #[validate(range(min = 1, max = 5))]
    pub value: i32,
    #[validate(range(min = 1, max = 4))]
    pub quarter: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGradeDto {
    #[validate(range(min = 1, max = 5))]
    pub value: Option<i32>,
    #[validate(range(min = 1, max = 4))]
    pub quarter: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(value: i32, quarter: i32) -> CreateGradeDto {
        CreateGradeDto {
            student_id: 1,
            subject_id: 1,
            value,
            quarter,
        }
    }

    #[test]
    fn test_grade_bounds() {
        assert!(create(1, 1).validate().is_ok());
        assert!(create(5, 4).validate().is_ok());
        assert!(create(0, 1).validate().is_err());
        assert!(create(6, 1).validate().is_err());
        assert!(create(3, 5).validate().is_err());
    }

    #[test]
    fn test_update_grade_partial() {
        let dto: UpdateGradeDto = serde_json::from_str(r#"{"value": 4}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.quarter, None);

        let dto: UpdateGradeDto = serde_json::from_str(r#"{"quarter": 9}"#).unwrap();
        assert!(dto.validate().is_err());
    }
}
