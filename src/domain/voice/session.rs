//! Recognition session lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Discriminant of [`SessionState`], validated by [`StateMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Idle,
    Listening,
    Completed,
    Errored,
}

impl StateMachine for SessionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            (Idle, Listening)
                | (Listening, Completed)
                | (Listening, Errored)
                | (Listening, Idle)
                | (Completed, Idle)
                | (Errored, Idle)
                | (Errored, Listening)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            Idle => vec![Listening],
            Listening => vec![Completed, Errored, Idle],
            Completed => vec![Idle],
            Errored => vec![Idle, Listening],
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Listening => "listening",
            SessionPhase::Completed => "completed",
            SessionPhase::Errored => "errored",
        };
        write!(f, "{}", s)
    }
}

/// State of the single recognition session a controller owns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Listening,
    /// A final transcript arrived; waiting for the provider to end.
    Completed(String),
    /// The provider reported an error; waiting for it to end.
    Errored(String),
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        match self {
            SessionState::Idle => SessionPhase::Idle,
            SessionState::Listening => SessionPhase::Listening,
            SessionState::Completed(_) => SessionPhase::Completed,
            SessionState::Errored(_) => SessionPhase::Errored,
        }
    }

    pub fn is_listening(&self) -> bool {
        matches!(self, SessionState::Listening)
    }
}
