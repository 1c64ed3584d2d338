//! # Gradebook API
//!
//! A REST API built with Rust, Axum, and PostgreSQL for running a school gradebook:
//! students, teachers, subjects, quarterly grades and the reports a school deputy
//! needs to act on them.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── gradebook-core/    # AppError, password hashing, UserRole
//! ├── gradebook-config/  # Environment-driven configuration
//! ├── gradebook-db/      # Pool setup, migrations, constraint helpers
//! ├── gradebook-auth/    # Access token issue and verification
//! ├── gradebook-models/  # Entities, DTOs and report shapes
//! └── gradebook-cli/     # create-deputy, seed, clear-seed
//! src/
//! ├── middleware/        # Bearer authentication and role gates
//! ├── modules/           # Feature modules
//! │   ├── auth/          # login, register, verify-token
//! │   ├── users/         # self-service password change
//! │   ├── students/
//! │   ├── teachers/      # includes the teacher-scoped /teacher/* views
//! │   ├── subjects/
//! │   ├── grades/
//! │   └── reports/       # deputy reports and dashboard statistics
//! ├── logging.rs         # tracing setup and request logging
//! ├── validator.rs       # ValidatedJson extractor
//! └── router.rs
//! ```
//!
//! Each feature module has the same layout: `controller.rs` (handlers),
//! `service.rs` (queries and business rules), `model.rs` (types used by the
//! module) and `router.rs`.
//!
//! ## Roles
//!
//! | Role | Can do |
//! |------|--------|
//! | Deputy | Everything, including deletions, teacher management and reports |
//! | Teacher | Enter and edit grades, see their own students |
//! | Student | Read dashboards and grades |
//!
//! Deputies are created with the `gradebook-cli create-deputy` command or through
//! `/register`. Teachers created by a deputy start with a temporary password.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

