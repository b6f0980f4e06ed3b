//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FITTRACK_VOICE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use fittrack_voice::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Recognizing {}", config.recognition.language);
//! ```

mod error;
mod features;
mod logging;
mod recognition;
mod routes;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{LogFormat, LoggingConfig};
pub use recognition::RecognitionConfig;
pub use routes::RouteConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Speech recognition session options
    #[serde(default)]
    pub recognition: RecognitionConfig,

    /// Navigation paths
    #[serde(default)]
    pub routes: RouteConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FITTRACK_VOICE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FITTRACK_VOICE__RECOGNITION__LANGUAGE=en-GB` -> `recognition.language = en-GB`
    /// - `FITTRACK_VOICE__LOGGING__FORMAT=json` -> `logging.format = json`
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
                    .prefix("FITTRACK_VOICE")
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
        self.recognition.validate()?;
        self.routes.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "FITTRACK_VOICE__RECOGNITION__LANGUAGE",
        "FITTRACK_VOICE__RECOGNITION__INTERIM_RESULTS",
        "FITTRACK_VOICE__ROUTES__PROFILE",
        "FITTRACK_VOICE__FEATURES__VOICE_COMMANDS_ENABLED",
        "FITTRACK_VOICE__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.recognition.language, "en-US");
        assert_eq!(config.routes.dashboard, "/dashboard");
        assert!(config.features.voice_commands_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FITTRACK_VOICE__RECOGNITION__LANGUAGE", "en-GB");
        env::set_var("FITTRACK_VOICE__RECOGNITION__INTERIM_RESULTS", "true");
        env::set_var("FITTRACK_VOICE__ROUTES__PROFILE", "/me");
        env::set_var("FITTRACK_VOICE__FEATURES__VOICE_COMMANDS_ENABLED", "false");
        env::set_var("FITTRACK_VOICE__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.recognition.language, "en-GB");
        assert!(config.recognition.interim_results);
        assert_eq!(config.routes.profile, "/me");
        assert_eq!(config.routes.analytics, "/dashboard/analytics");
        assert!(!config.features.voice_commands_enabled);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_bad_route() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FITTRACK_VOICE__ROUTES__PROFILE", "profile");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidRoutePath(_))
        ));
    }
}
