//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types and the state machine trait
//! that form the vocabulary of the FitTrack voice domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ExerciseId, PlanId, UserId, WorkoutId};
pub use state_machine::StateMachine;
