use std::env;

use crate::parse_or;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(lookup("PORT"), 8000),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address() {
        assert_eq!(ServerConfig::from_source(|_| None).address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_invalid_port_uses_default() {
        let config = ServerConfig::from_source(|key| match key {
            "PORT" => Some("eighty".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8000);
    }
}
