//! Outcome of running one transcript through the command pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::intent::VoiceIntent;
use crate::domain::foundation::DomainError;

/// User-facing message describing what a command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeMessage(String);

impl OutcomeMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// `Command not recognized: "<transcript>"`, quoting the transcript verbatim.
    pub fn unrecognized(transcript: &str) -> Self {
        Self(format!("Command not recognized: \"{}\"", transcript))
    }

    /// `Failed to <operation>`.
    pub fn failed(operation: &str) -> Self {
        Self(format!("Failed to {}", operation))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OutcomeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal result of one pipeline run.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    Executed {
        intent: VoiceIntent,
        message: OutcomeMessage,
    },
    Failed {
        intent: VoiceIntent,
        error: DomainError,
        message: OutcomeMessage,
    },
    Unrecognized {
        transcript: String,
        message: OutcomeMessage,
    },
}

impl CommandOutcome {
    pub fn message(&self) -> &OutcomeMessage {
        match self {
            CommandOutcome::Executed { message, .. }
            | CommandOutcome::Failed { message, .. }
            | CommandOutcome::Unrecognized { message, .. } => message,
        }
    }

    pub fn intent(&self) -> Option<&VoiceIntent> {
        match self {
            CommandOutcome::Executed { intent, .. } | CommandOutcome::Failed { intent, .. } => {
                Some(intent)
            }
            CommandOutcome::Unrecognized { .. } => None,
        }
    }

    pub fn is_executed(&self) -> bool {
        matches!(self, CommandOutcome::Executed { .. })
    }
}
