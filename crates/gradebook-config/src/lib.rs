//! # Gradebook Config
//!
//! Configuration types for the Gradebook API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Token signing secret and lifetime
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`grading`]: Grading scale constants used by reports and teacher onboarding
//! - [`server`]: Listen address
//!
//! Every `from_env` constructor delegates to a `from_source` variant taking a lookup
//! closure, so tests can supply values without touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::{CorsConfig, GradingConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let grading_config = GradingConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod grading;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use grading::GradingConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
