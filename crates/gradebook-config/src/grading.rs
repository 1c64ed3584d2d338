use std::env;

use crate::parse_or;

/// A (student, subject, quarter) average strictly below this value is failing.
pub const DEFAULT_FAILING_THRESHOLD: f64 = 3.0;

/// Initial password of teacher accounts created by a deputy.
pub const DEFAULT_TEACHER_TEMP_PASSWORD: &str = "password123";

#[derive(Clone)]
pub struct GradingConfig {
    pub failing_threshold: f64,
    pub teacher_temp_password: String,
}

impl std::fmt::Debug for GradingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradingConfig")
            .field("failing_threshold", &self.failing_threshold)
            .finish_non_exhaustive()
    }
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            failing_threshold: DEFAULT_FAILING_THRESHOLD,
            teacher_temp_password: DEFAULT_TEACHER_TEMP_PASSWORD.to_string(),
        }
    }
}

impl GradingConfig {
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            failing_threshold: parse_or(
                lookup("FAILING_GRADE_THRESHOLD"),
                DEFAULT_FAILING_THRESHOLD,
            ),
            teacher_temp_password: lookup("TEACHER_TEMP_PASSWORD")
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_TEACHER_TEMP_PASSWORD.to_string()),
        }
    }
}
