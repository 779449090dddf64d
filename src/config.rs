//! Configuration management for the contact book host.
//!
//! This module loads settings from environment variables, reading a `.env`
//! file first if one is present. Every variable is optional.

use crate::error::{ConfigError, ConfigResult};
use crate::query::SortOrder;
use std::env;

/// Configuration for the contact book binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial sort direction of the list (default: ascending)
    pub sort_order: SortOrder,

    /// Initial search text of the list (default: empty)
    pub search_text: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_SORT_ORDER`: `asc` or `desc` (default: `asc`)
    /// - `CONTACT_BOOK_SEARCH`: free-text filter (default: empty)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let sort_order = match env::var("CONTACT_BOOK_SORT_ORDER") {
            Ok(val) => val
                .parse::<SortOrder>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_SORT_ORDER".to_string(),
                    reason,
                })?,
            Err(_) => SortOrder::default(),
        };

        let search_text = env::var("CONTACT_BOOK_SEARCH").unwrap_or_default();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            sort_order,
            search_text,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sort_order: SortOrder::Ascending,
            search_text: String::new(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["CONTACT_BOOK_SORT_ORDER", "CONTACT_BOOK_SEARCH", "LOG_LEVEL"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.sort_order, SortOrder::Ascending);
        assert!(config.search_text.is_empty());
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_SORT_ORDER", "desc");
        guard.set("CONTACT_BOOK_SEARCH", "ann");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.sort_order, SortOrder::Descending);
        assert_eq!(config.search_text, "ann");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_sort_order() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_SORT_ORDER", "random");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_BOOK_SORT_ORDER");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "  ");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "LOG_LEVEL"
        ));
    }
}
