//! Speech recognition configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::RecognitionOptions;

/// Options handed to the recognition provider for every session
#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionConfig {
    /// BCP 47 language tag
    #[serde(default = "default_language")]
    pub language: String,

    /// Keep listening after the first utterance
    #[serde(default)]
    pub continuous: bool,

    /// Surface partial transcripts while the user speaks
    #[serde(default)]
    pub interim_results: bool,
}

impl RecognitionConfig {
    /// Provider options for a new session
    pub fn options(&self) -> RecognitionOptions {
        RecognitionOptions {
            language: self.language.clone(),
            continuous: self.continuous,
            interim_results: self.interim_results,
        }
    }

    /// Validate recognition configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let tag = self.language.trim();
        if tag.is_empty() {
            return Err(ValidationError::MissingRequired("recognition.language"));
        }
        let well_formed = tag
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if !well_formed {
            return Err(ValidationError::InvalidLanguageTag(tag.to_string()));
        }
        Ok(())
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            continuous: false,
            interim_results: false,
        }
    }
}

fn default_language() -> String {
    "en-US".to_string()
}
