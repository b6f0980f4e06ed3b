//! CommandError - why an executor could not complete a voice command.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, WorkoutId};
use crate::ports::StoreError;

/// Error type for voice command executors
///
/// Never shown to the user directly; the dispatcher reports it as
/// `Failed to <operation>` and logs it.
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("No authenticated user")]
    Unauthenticated,

    #[error("Invalid command parameters: {0}")]
    InvalidParameters(#[from] ValidationError),

    #[error("Fitness store error: {0}")]
    Store(#[from] StoreError),

    /// The workout was written but its exercise entry was not. The workout
    /// record is left in place without a linked exercise.
    #[error("Workout {workout_id} created but its exercise entry failed: {source}")]
    OrphanedWorkout {
        workout_id: WorkoutId,
        #[source]
        source: StoreError,
    },
}

impl CommandError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CommandError::Unauthenticated => ErrorCode::Unauthenticated,
            CommandError::InvalidParameters(_) => ErrorCode::InvalidParameters,
            CommandError::Store(StoreError::Unauthorized) => ErrorCode::Unauthenticated,
            CommandError::Store(_) => ErrorCode::StoreError,
            CommandError::OrphanedWorkout { .. } => ErrorCode::PartialWrite,
        }
    }

    /// Structured form for outcomes and logs.
    pub fn to_domain_error(&self) -> DomainError {
        let error = DomainError::new(self.code(), self.to_string());
        match self {
            CommandError::OrphanedWorkout { workout_id, .. } => {
                error.with_detail("orphaned_workout_id", workout_id.to_string())
            }
            _ => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_by_variant() {
        assert_eq!(CommandError::Unauthenticated.code(), ErrorCode::Unauthenticated);
        assert_eq!(
            CommandError::from(ValidationError::empty_field("exercise_name")).code(),
            ErrorCode::InvalidParameters
        );
        assert_eq!(
            CommandError::from(StoreError::Backend("down".into())).code(),
            ErrorCode::StoreError
        );
        assert_eq!(
            CommandError::from(StoreError::Unauthorized).code(),
            ErrorCode::Unauthenticated
        );
    }

    #[test]
    fn orphaned_workout_carries_id_detail() {
        let workout_id = WorkoutId::new();
        let err = CommandError::OrphanedWorkout {
            workout_id,
            source: StoreError::Backend("insert failed".into()),
        };
        let domain = err.to_domain_error();

        assert_eq!(domain.code, ErrorCode::PartialWrite);
        assert_eq!(
            domain.details.get("orphaned_workout_id"),
            Some(&workout_id.to_string())
        );
        assert!(domain.message.contains("insert failed"));
    }
}
