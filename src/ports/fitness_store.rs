//! Fitness store port.
//!
//! Defines the slice of the hosted data store that voice commands use.
//! Every call is scoped to the authenticated caller; row-level authorization
//! is the store's concern.

use async_trait::async_trait;

use crate::domain::fitness::{NewExercise, NewWorkout, WorkoutPlanSummary};
use crate::domain::foundation::{ExerciseId, UserId, WorkoutId};

/// Errors that can occur during fitness store operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Not authorized to access this record")]
    Unauthorized,

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Port for reading plans and writing quick-entry workouts.
#[async_trait]
pub trait FitnessStore: Send + Sync {
    /// The signed-in user, or `None` when no one is authenticated.
    async fn current_user(&self) -> Result<Option<UserId>, StoreError>;

    /// Insert a workout record and return its id.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller may not write for `workout.user_id`
    /// - `Backend` on persistence failure
    async fn create_workout(&self, workout: &NewWorkout) -> Result<WorkoutId, StoreError>;

    /// Insert an exercise record linked to an existing workout.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the referenced workout does not exist
    /// - `Backend` on persistence failure
    async fn create_exercise(&self, exercise: &NewExercise) -> Result<ExerciseId, StoreError>;

    /// Active plans of `user_id`, in the store's own order.
    async fn list_active_plans(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<WorkoutPlanSummary>, StoreError>;
}
