//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod voice;

pub use voice::{
    CommandDispatcher, CommandError, NavigateHandler, QuickLogHandler, StartOutcome,
    StartPlanHandler, StopHandle, VoiceError, VoiceSessionController,
};
