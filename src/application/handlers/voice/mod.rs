//! Voice command handlers.

mod command_error;
mod dispatch_command;
mod navigate;
mod quick_log;
mod session_controller;
mod start_plan;

pub use command_error::CommandError;
pub use dispatch_command::CommandDispatcher;
pub use navigate::NavigateHandler;
pub use quick_log::QuickLogHandler;
pub use session_controller::{StartOutcome, StopHandle, VoiceError, VoiceSessionController};
pub use start_plan::StartPlanHandler;
