//! The role axis used for every authorization decision.
//!
//! Roles are stored and serialized in lowercase. Parsing is case-insensitive so that
//! `"Deputy"` in a token or request resolves to [`UserRole::Deputy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Deputy,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Student, UserRole::Teacher, UserRole::Deputy];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Deputy => "deputy",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid role '{0}'. Allowed values: student, teacher, deputy")]
pub struct ParseRoleError(pub String);

impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

impl TryFrom<String> for UserRole {
    type Error = ParseRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!("student".parse::<UserRole>(), Ok(UserRole::Student));
        assert_eq!("teacher".parse::<UserRole>(), Ok(UserRole::Teacher));
        assert_eq!("deputy".parse::<UserRole>(), Ok(UserRole::Deputy));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("TEACHER".parse::<UserRole>(), Ok(UserRole::Teacher));
        assert_eq!("Deputy".parse::<UserRole>(), Ok(UserRole::Deputy));
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        let err = "principal".parse::<UserRole>().unwrap_err();
        assert_eq!(err, ParseRoleError("principal".to_string()));
        assert!(err.to_string().contains("student, teacher, deputy"));
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Deputy).unwrap(), "\"deputy\"");
    }

    #[test]
    fn test_deserializes_any_case() {
        let role: UserRole = serde_json::from_str("\"Student\"").unwrap();
        assert_eq!(role, UserRole::Student);
        assert!(serde_json::from_str::<UserRole>("\"janitor\"").is_err());
    }
}
