//! Configuration management for the contact book binary.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first. The library itself needs no configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the saved address book.
pub const DEFAULT_BOOK_PATH: &str = "address_book.bin";

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is saved and loaded (default: "address_book.bin")
    pub book_path: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Saved address book file (default: "address_book.bin")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy doesn't print anything, and a missing .env is fine
        let _ = dotenvy::dotenv();

        let book_path = Self::parse_env_path("CONTACT_BOOK_PATH", DEFAULT_BOOK_PATH)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            book_path,
            log_level,
        })
    }

    /// Parse an environment variable as a non-empty path with a default value.
    fn parse_env_path(var_name: &str, default: &str) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val)),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid UTF-8".to_string(),
            }),
            Err(env::VarError::NotPresent) => Ok(PathBuf::from(default)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
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
        assert_eq!(config.book_path, PathBuf::from("address_book.bin"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_path() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PATH", "/tmp/contacts.bin");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.bin"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_path() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PATH", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_BOOK_PATH");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_path_default() {
        let mut guard = EnvGuard::new();
        guard.unset("TEST_BOOK_PATH_UNSET");

        let result = Config::parse_env_path("TEST_BOOK_PATH_UNSET", "fallback.bin");
        assert_eq!(result.unwrap(), PathBuf::from("fallback.bin"));
    }
}
