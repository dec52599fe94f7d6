//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AETHERIA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use aetheria::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Submitting to {}", config.ingestion.endpoint());
//! ```

mod error;
mod ingestion;
mod logging;
mod validation;

pub use error::{ConfigError, ValidationError};
pub use ingestion::{IngestionConfig, DEFAULT_BASE_URL};
pub use logging::{LogFormat, LoggingConfig};
pub use validation::ValidationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration pointed at a local analysis API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analysis API connection
    #[serde(default)]
    pub ingestion: IngestionConfig,

    /// Record validation policies
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AETHERIA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AETHERIA__INGESTION__BASE_URL=https://api.example.com` -> `ingestion.base_url`
    /// - `AETHERIA__VALIDATION__LEGACY_TOKENS=reject` -> `validation.legacy_tokens`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AETHERIA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ingestion.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::UnknownFieldPolicy;
    use crate::domain::vocabulary::LegacyTokenPolicy;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "AETHERIA__INGESTION__BASE_URL",
        "AETHERIA__INGESTION__TIMEOUT_SECS",
        "AETHERIA__INGESTION__API_TOKEN",
        "AETHERIA__VALIDATION__LEGACY_TOKENS",
        "AETHERIA__VALIDATION__UNKNOWN_FIELDS",
        "AETHERIA__LOGGING__FORMAT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ingestion.base_url, DEFAULT_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_base_url_falls_back_to_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AETHERIA__INGESTION__BASE_URL", "   ");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().ingestion.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AETHERIA__INGESTION__BASE_URL", "https://dreams.example.com");
        env::set_var("AETHERIA__INGESTION__TIMEOUT_SECS", "10");
        env::set_var("AETHERIA__INGESTION__API_TOKEN", "tok_abc");
        env::set_var("AETHERIA__VALIDATION__LEGACY_TOKENS", "reject");
        env::set_var("AETHERIA__VALIDATION__UNKNOWN_FIELDS", "ignore");
        env::set_var("AETHERIA__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ingestion.base_url, "https://dreams.example.com");
        assert_eq!(config.ingestion.timeout_secs, 10);
        assert_eq!(
            config.ingestion.api_token.as_ref().map(|t| t.expose_secret().as_str()),
            Some("tok_abc")
        );
        assert_eq!(config.validation.legacy_tokens, LegacyTokenPolicy::Reject);
        assert_eq!(config.validation.unknown_fields, UnknownFieldPolicy::Ignore);
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
