//! Recognition provider port.
//!
//! Abstracts the platform speech-recognition capability. A provider opens a
//! session on [`RecognitionProvider::start`] and reports everything that
//! happens in it through the event sink it was given, ending with
//! [`RecognitionEvent::End`].

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Events emitted by a recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Partial text while the user is still speaking.
    Interim(String),
    /// Finalized text of one utterance.
    Final(String),
    /// Provider-reported failure (`no-speech`, `not-allowed`, ...).
    Error(String),
    /// The session is over.
    End,
}

/// Channel a provider pushes session events into.
pub type RecognitionEventSink = mpsc::UnboundedSender<RecognitionEvent>;

/// Options passed to the provider when a session opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionOptions {
    /// BCP 47 language tag.
    pub language: String,
    /// Keep listening after the first utterance.
    pub continuous: bool,
    /// Emit [`RecognitionEvent::Interim`] events.
    pub interim_results: bool,
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            continuous: false,
            interim_results: false,
        }
    }
}

/// Errors raised when opening a session
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecognitionError {
    #[error("Speech recognition is not supported")]
    Unsupported,

    #[error("Failed to start speech recognition: {0}")]
    StartFailed(String),
}

/// Port for the platform speech recognizer.
pub trait RecognitionProvider: Send + Sync {
    /// Whether speech recognition is available at all.
    fn is_supported(&self) -> bool;

    /// Open a session; events for it are sent to `events`.
    fn start(
        &self,
        options: &RecognitionOptions,
        events: RecognitionEventSink,
    ) -> Result<(), RecognitionError>;

    /// Ask the provider to stop listening. Best effort; trailing events may
    /// still arrive.
    fn stop(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognition_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn RecognitionProvider) {}
    }

    #[test]
    fn default_options_are_single_utterance_english() {
        let options = RecognitionOptions::default();
        assert_eq!(options.language, "en-US");
        assert!(!options.continuous);
        assert!(!options.interim_results);
    }
}
