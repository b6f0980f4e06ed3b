//! Voice module - command catalogue, matching and session lifecycle.
//!
//! A finalized transcript is normalized, matched against the ordered
//! [`CommandRegistry`] and turned into a typed [`VoiceIntent`]. Executing the
//! intent lives in the application layer.

mod intent;
mod matcher;
mod outcome;
mod registry;
mod session;
mod status;

pub use intent::{PlanQuery, QuickLogRequest, VoiceIntent};
pub use matcher::{normalize, IntentMatcher, MatchResult};
pub use outcome::{CommandOutcome, OutcomeMessage};
pub use registry::{CommandRegistry, CommandRule, IntentParser};
pub use session::{SessionPhase, SessionState};
pub use status::StatusSurface;
