//! Authentication payloads, re-exported from the `gradebook-models` crate.

pub use gradebook_models::users::{
    LoginRequest, LoginResponse, RegisterRequestDto, User, VerifyTokenResponse,
};
