//! # Gradebook Models
//!
//! Domain models and DTOs for the Gradebook API.
//!
//! # Modules
//!
//! - [`users`]: Accounts, login/registration payloads
//! - [`students`]: Student entity and DTOs
//! - [`teachers`]: Teacher entity and DTOs
//! - [`subjects`]: Subject entity and DTOs
//! - [`grades`]: Grade entity and DTOs
//! - [`reports`]: Named result types of the reporting endpoints
//!
//! Entities derive [`sqlx::FromRow`] and map one-to-one onto their table. Request DTOs
//! derive [`validator::Validate`] and are checked before reaching a service.

pub mod grades;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic `{"message": ...}` body returned by deletes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Re-export commonly used types at crate root for convenience
pub use grades::{CreateGradeDto, Grade, GradeWithSubject, UpdateGradeDto};
pub use reports::{
    AverageResponse, ClassAverages, ClassPerformance, CountResponse, FailingStudent, GradeFact,
    StudentGrades, SubjectAverage, TeacherGradeRow, TopWorstClasses,
};
pub use students::{CreateStudentDto, Student, UpdateStudentDto};
pub use subjects::{CreateSubjectDto, Subject, UpdateSubjectDto};
pub use teachers::{CreateTeacherDto, Teacher, UpdateTeacherDto};
pub use users::{
    ChangePasswordDto, LoginRequest, LoginResponse, RegisterRequestDto, User, VerifyTokenResponse,
};
