//! Middleware for request processing.
//!
//! Access control runs as two stages in front of a protected route:
//!
//! 1. **Authentication** ([`auth`]): the `Authorization: Bearer <token>` header is
//!    verified and the caller's identity is stored in the request extensions as
//!    [`auth::AuthUser`]. A missing or bad token ends the request with 401.
//! 2. **Role** ([`role`]): the authenticated role is compared against the roles
//!    allowed on the route. A mismatch ends the request with 403.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::{auth::require_auth, role::require_deputy};
//!
//! let reports = Router::new()
//!     .route("/students/failing", get(get_failing_students))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_deputy));
//!
//! let stats = Router::new()
//!     .route("/stats/students-count", get(get_students_count))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

pub mod auth;
pub mod role;
