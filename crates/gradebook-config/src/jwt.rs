use std::env;
use std::fmt;

use crate::parse_or;

/// Signing secret used when `JWT_SECRET` is absent outside production.
pub const FALLBACK_SECRET: &str = "gradebook-insecure-development-secret";

/// 24 hours.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 86_400;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
    /// Set when [`FALLBACK_SECRET`] is in use; startup logs a warning.
    pub uses_fallback_secret: bool,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("token_expiry", &self.token_expiry)
            .field("uses_fallback_secret", &self.uses_fallback_secret)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("JWT_SECRET must be set when ENVIRONMENT=production")]
pub struct MissingSecret;

impl JwtConfig {
    /// Loads the config from the process environment.
    ///
    /// # Panics
    ///
    /// Panics when `ENVIRONMENT=production` and `JWT_SECRET` is unset or empty.
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok()).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, MissingSecret>
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = lookup("ENVIRONMENT")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let (secret, uses_fallback_secret) = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => (secret, false),
            None if production => return Err(MissingSecret),
            None => (FALLBACK_SECRET.to_string(), true),
        };

        Ok(Self {
            secret,
            token_expiry: parse_or(lookup("JWT_EXPIRY_SECONDS"), DEFAULT_TOKEN_EXPIRY),
            uses_fallback_secret,
        })
    }
}
