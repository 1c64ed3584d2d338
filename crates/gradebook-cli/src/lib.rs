//! # Gradebook CLI
//!
//! Operator tooling for the Gradebook API: creating deputy accounts and
//! filling a development database with fake classes, teachers and grades.
//!
//! ## Usage
//!
//! ```ignore
//! use gradebook_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(6); // 6 classes with defaults
//! seed_all(&pool, config).await?;
//! ```

pub mod deputy;
pub mod seeder;
