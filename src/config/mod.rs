//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMMITTEE_DASHBOARD` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use committee_dashboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod features;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration. `None` selects the in-memory store.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COMMITTEE_DASHBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COMMITTEE_DASHBOARD__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `COMMITTEE_DASHBOARD__DATABASE__URL=...` -> `database.url = ...`
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
                    .prefix("COMMITTEE_DASHBOARD")
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
        if let Some(database) = &self.database {
            database.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// JSON logs are always used in production.
    pub fn json_logs(&self) -> bool {
        self.is_production() || self.features.json_logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "COMMITTEE_DASHBOARD__SERVER__PORT",
        "COMMITTEE_DASHBOARD__SERVER__ENVIRONMENT",
        "COMMITTEE_DASHBOARD__DATABASE__URL",
        "COMMITTEE_DASHBOARD__DATABASE__MAX_CONNECTIONS",
        "COMMITTEE_DASHBOARD__FEATURES__SEED_SAMPLE_DATA",
        "COMMITTEE_DASHBOARD__FEATURES__JSON_LOGS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.database.is_none());
        assert!(config.features.seed_sample_data);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_section_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("COMMITTEE_DASHBOARD__DATABASE__URL", "postgres://test@localhost/committee");
        env::set_var("COMMITTEE_DASHBOARD__DATABASE__MAX_CONNECTIONS", "4");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let database = config.database.as_ref().unwrap();
        assert_eq!(database.url, "postgres://test@localhost/committee");
        assert_eq!(database.max_connections, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("COMMITTEE_DASHBOARD__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_production_forces_json_logs() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("COMMITTEE_DASHBOARD__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(!config.features.json_logs);
        assert!(config.json_logs());
    }

    #[test]
    fn test_feature_flags_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("COMMITTEE_DASHBOARD__FEATURES__SEED_SAMPLE_DATA", "false");
        env::set_var("COMMITTEE_DASHBOARD__FEATURES__JSON_LOGS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(!config.features.seed_sample_data);
        assert!(config.json_logs());
    }

    #[test]
    fn test_invalid_database_url_fails_validation() {
        let config = AppConfig {
            database: Some(DatabaseConfig {
                url: "sqlite://committee.db".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDatabaseUrl));
    }
}
