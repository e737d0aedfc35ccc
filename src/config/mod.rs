//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LIFESPAN` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use lifespan_estimator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod estimator;
mod server;

pub use error::{ConfigError, ValidationError};
pub use estimator::EstimatorConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const INTERACTIVE_LOG_LEVEL: &str = "warn";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Estimator configuration (default country)
    #[serde(default)]
    pub estimator: EstimatorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LIFESPAN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LIFESPAN__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LIFESPAN__ESTIMATOR__DEFAULT_COUNTRY=Brazil` -> `estimator.default_country = "Brazil"`
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
                    .prefix("LIFESPAN")
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
        self.server.validate()?;
        self.estimator.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Tracing filter used when `RUST_LOG` is unset.
    ///
    /// The interactive questionnaire shares the terminal with its log
    /// output, so it only reports warnings.
    pub fn log_filter(&self, interactive: bool) -> &str {
        if interactive {
            INTERACTIVE_LOG_LEVEL
        } else {
            &self.server.log_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("LIFESPAN__SERVER__PORT");
        env::remove_var("LIFESPAN__SERVER__ENVIRONMENT");
        env::remove_var("LIFESPAN__ESTIMATOR__DEFAULT_COUNTRY");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.estimator.default_country, "World");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LIFESPAN__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LIFESPAN__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_default_country_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LIFESPAN__ESTIMATOR__DEFAULT_COUNTRY", "Brazil");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.estimator.default_country, "Brazil");
    }

    #[test]
    fn test_interactive_log_filter_is_quiet() {
        let config = AppConfig::default();
        assert_eq!(config.log_filter(true), "warn");
        assert_eq!(config.log_filter(false), config.server.log_level);
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidPort));
    }
}
