//! Teacher data models and DTOs.
//!
//! Re-exported from the `gradebook-models` crate together with the report types the
//! teacher-scoped views return.

pub use gradebook_models::StudentGrades;
pub use gradebook_models::teachers::*;
