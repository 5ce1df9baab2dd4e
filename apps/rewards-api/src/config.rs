//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! The log filter is read separately from `RUST_LOG` by the subscriber.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use rewards_store::IdStrategy;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body limit (64 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// HTTP API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: IpAddr,

    /// HTTP server port
    pub port: u16,

    /// How accepted receipts are named
    pub id_strategy: IdStrategy,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            id_strategy: IdStrategy::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: parse_or(&lookup, "HTTP_HOST", defaults.host)?,
            port: parse_or(&lookup, "HTTP_PORT", defaults.port)?,
            id_strategy: parse_or(&lookup, "ID_STRATEGY", defaults.id_strategy)?,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
        };

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_BODY_BYTES".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(config)
    }

    /// Socket address the server listens on.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:8080");
        assert_eq!(config.id_strategy, IdStrategy::ContentHash);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("HTTP_HOST", "127.0.0.1"),
            ("HTTP_PORT", "9000"),
            ("ID_STRATEGY", "random"),
            ("MAX_BODY_BYTES", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address().to_string(), "127.0.0.1:9000");
        assert_eq!(config.id_strategy, IdStrategy::Random);
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            ("HTTP_PORT", "eighty"),
            ("HTTP_HOST", "localhost:80"),
            ("ID_STRATEGY", "sequential"),
            ("MAX_BODY_BYTES", "0"),
        ];
        for (key, value) in cases {
            let err = ApiConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            );
        }
    }
}
