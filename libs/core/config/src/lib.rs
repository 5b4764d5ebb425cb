pub mod tracing;

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development, // Local runs, tests, CI
    Production,  // Deployed workloads
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load and parse environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Load the first variable that is set out of `keys`
///
/// The error names every key that was tried.
pub fn env_required_any(keys: &[&str]) -> Result<String, ConfigError> {
    keys.iter()
        .find_map(|key| env::var(key).ok())
        .ok_or_else(|| ConfigError::MissingEnvVar(keys.join(" or ")))
}

/// Parse an environment variable into `T`, falling back to `default` when unset
pub fn env_parse_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });

        temp_env::with_var("APP_ENV", Some("Production"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default_without_value() {
        temp_env::with_var_unset("SHOP_MISSING_VAR", || {
            let result = env_or_default("SHOP_MISSING_VAR", "default_value");
            assert_eq!(result, "default_value");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("SHOP_MISSING_REQUIRED", || {
            let err = env_required("SHOP_MISSING_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("SHOP_MISSING_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_required_any_prefers_first_key() {
        temp_env::with_vars(
            [("SHOP_PRIMARY", Some("first")), ("SHOP_FALLBACK", Some("second"))],
            || {
                let value = env_required_any(&["SHOP_PRIMARY", "SHOP_FALLBACK"]).unwrap();
                assert_eq!(value, "first");
            },
        );
    }

    #[test]
    fn test_env_required_any_uses_fallback() {
        temp_env::with_vars(
            [("SHOP_PRIMARY", None::<&str>), ("SHOP_FALLBACK", Some("second"))],
            || {
                let value = env_required_any(&["SHOP_PRIMARY", "SHOP_FALLBACK"]).unwrap();
                assert_eq!(value, "second");
            },
        );
    }

    #[test]
    fn test_env_required_any_names_all_keys() {
        temp_env::with_vars(
            [("SHOP_PRIMARY", None::<&str>), ("SHOP_FALLBACK", None::<&str>)],
            || {
                let err = env_required_any(&["SHOP_PRIMARY", "SHOP_FALLBACK"]).unwrap_err();
                assert!(err.to_string().contains("SHOP_PRIMARY or SHOP_FALLBACK"));
            },
        );
    }

    #[test]
    fn test_env_parse_or_default() {
        temp_env::with_var_unset("SHOP_POOL", || {
            assert_eq!(env_parse_or_default("SHOP_POOL", 7u32).unwrap(), 7);
        });

        temp_env::with_var("SHOP_POOL", Some("42"), || {
            assert_eq!(env_parse_or_default("SHOP_POOL", 7u32).unwrap(), 42);
        });

        temp_env::with_var("SHOP_POOL", Some("lots"), || {
            let err = env_parse_or_default("SHOP_POOL", 7u32).unwrap_err();
            assert!(err.to_string().contains("SHOP_POOL"));
        });
    }
}
