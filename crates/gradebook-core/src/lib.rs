//! # Gradebook Core
//!
//! Core types, errors, and utilities for the Gradebook API.
//!
//! This crate provides foundational types used throughout the Gradebook application:
//!
//! - [`errors`]: Application error taxonomy with HTTP response conversion
//! - [`password`]: One-way password digests (bcrypt)
//! - [`roles`]: The [`UserRole`] authorization axis
//!
//! # Example
//!
//! ```ignore
//! use gradebook_core::{AppError, UserRole};
//! use gradebook_core::password::{hash_password, verify_password};
//!
//! let role: UserRole = "Deputy".parse()?;
//! let digest = hash_password("secure_password")?;
//! if !verify_password("secure_password", &digest)? {
//!     return Err(AppError::unauthorized("Invalid username or password"));
//! }
//! ```

pub mod errors;
pub mod password;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password, verify_password_or_dummy};
pub use roles::{ParseRoleError, UserRole};
