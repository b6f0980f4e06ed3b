//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Tracing subscriber configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level for this crate; `RUST_LOG` overrides it
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("warn,fittrack_voice={}", self.level.to_lowercase())
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ValidationError::InvalidLogLevel(self.level.clone()));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.filter_directive(), "warn,fittrack_voice=info");
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let config = LoggingConfig {
            level: "DEBUG".to_string(),
            format: LogFormat::Json,
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.filter_directive(), "warn,fittrack_voice=debug");
    }

    #[test]
    fn test_rejects_unknown_level() {
        let config = LoggingConfig {
            level: "verbose".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_format_deserialization() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
    }
}
