//! Application layer - Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports:
//! a recognized transcript becomes an intent, the intent runs against the
//! fitness store and navigator, and the outcome lands on the status surface.

pub mod handlers;

pub use handlers::{
    CommandDispatcher, CommandError, NavigateHandler, QuickLogHandler, StartOutcome,
    StartPlanHandler, StopHandle, VoiceError, VoiceSessionController,
};
