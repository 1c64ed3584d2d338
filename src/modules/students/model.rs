//! Student data models and DTOs.
//!
//! Re-exported from the `gradebook-models` crate.

pub use gradebook_models::students::*;
