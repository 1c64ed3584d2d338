//! # Gradebook Auth
//!
//! Token Service for the Gradebook API.
//!
//! This crate provides:
//!
//! - [`claims`]: The typed claim set carried by every session token
//! - [`jwt`]: Token creation and verification
//! - [`error`]: [`TokenError`], the failure kinds of verification
//!
//! Tokens are HS256-signed and carry the user id, the user's role and an absolute
//! expiry. Verification decodes straight into [`Identity`]; callers never inspect
//! raw claim values.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_auth::{create_access_token, verify_token};
//! use gradebook_config::JwtConfig;
//! use gradebook_core::UserRole;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(42, UserRole::Teacher, &config)?;
//! let identity = verify_token(&token, &config)?;
//! assert_eq!(identity.role, UserRole::Teacher);
//! ```

pub mod claims;
pub mod error;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, Identity};
pub use error::TokenError;
pub use jwt::{create_access_token, create_access_token_at, verify_token};
