//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Offer voice commands at all; when off the engine reports itself unsupported
    #[serde(default = "default_voice_commands_enabled")]
    pub voice_commands_enabled: bool,

    /// Put the underlying error into failure messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            voice_commands_enabled: default_voice_commands_enabled(),
            verbose_errors: false,
        }
    }
}

fn default_voice_commands_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.voice_commands_enabled);
        assert!(!flags.verbose_errors);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "voice_commands_enabled": false,
            "verbose_errors": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.voice_commands_enabled);
        assert!(flags.verbose_errors);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(flags.voice_commands_enabled);
        assert!(!flags.verbose_errors);
    }
}
