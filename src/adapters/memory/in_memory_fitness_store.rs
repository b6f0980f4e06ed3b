//! In-memory fitness store implementation.
//!
//! This adapter provides an in-memory implementation of the `FitnessStore`
//! port. Useful for:
//! - Testing the voice command handlers
//! - Running the demo binary without a hosted backend
//!
//! Data does not persist across restarts.

use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::RwLock;

use crate::domain::fitness::{NewExercise, NewWorkout, WorkoutPlanSummary};
use crate::domain::foundation::{ExerciseId, UserId, WorkoutId};
use crate::ports::{FitnessStore, StoreError};

/// Store operation, recorded in call order for verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCall {
    CurrentUser,
    CreateWorkout,
    CreateExercise,
    ListActivePlans,
}

/// In-memory implementation of the FitnessStore port.
///
/// The signed-in user and the active plans are fixed at construction.
/// Failures can be injected per operation.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryFitnessStore::new()
///     .with_user(UserId::new("athlete-1")?)
///     .with_plans(vec![push_day]);
///
/// let plans = store.list_active_plans(&user_id).await?;
/// ```
#[derive(Default)]
pub struct InMemoryFitnessStore {
    user: Option<UserId>,
    plans: Vec<WorkoutPlanSummary>,
    workouts: RwLock<Vec<(WorkoutId, NewWorkout)>>,
    exercises: RwLock<Vec<(ExerciseId, NewExercise)>>,
    calls: Mutex<Vec<StoreCall>>,
    fail_workout_writes: bool,
    fail_exercise_writes: bool,
    fail_plan_listing: bool,
}

impl InMemoryFitnessStore {
    /// Creates an empty store with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs `user_id` in.
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user = Some(user_id);
        self
    }

    /// Active plans of the signed-in user, in listing order.
    pub fn with_plans(mut self, plans: Vec<WorkoutPlanSummary>) -> Self {
        self.plans = plans;
        self
    }

    pub fn failing_workout_writes(mut self) -> Self {
        self.fail_workout_writes = true;
        self
    }

    pub fn failing_exercise_writes(mut self) -> Self {
        self.fail_exercise_writes = true;
        self
    }

    pub fn failing_plan_listing(mut self) -> Self {
        self.fail_plan_listing = true;
        self
    }

    /// Operations performed so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Stored workouts, in insertion order.
    pub async fn workouts(&self) -> Vec<(WorkoutId, NewWorkout)> {
        self.workouts.read().await.clone()
    }

    /// Stored exercises, in insertion order.
    pub async fn exercises(&self) -> Vec<(ExerciseId, NewExercise)> {
        self.exercises.read().await.clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl FitnessStore for InMemoryFitnessStore {
    async fn current_user(&self) -> Result<Option<UserId>, StoreError> {
        self.record(StoreCall::CurrentUser);
        Ok(self.user.clone())
    }

    async fn create_workout(&self, workout: &NewWorkout) -> Result<WorkoutId, StoreError> {
        self.record(StoreCall::CreateWorkout);
        if self.fail_workout_writes {
            return Err(StoreError::Backend("simulated workout write failure".to_string()));
        }
        if self.user.as_ref() != Some(&workout.user_id) {
            return Err(StoreError::Unauthorized);
        }

        let id = WorkoutId::new();
        self.workouts.write().await.push((id, workout.clone()));
        Ok(id)
    }

    async fn create_exercise(&self, exercise: &NewExercise) -> Result<ExerciseId, StoreError> {
        self.record(StoreCall::CreateExercise);
        if self.fail_exercise_writes {
            return Err(StoreError::Backend("simulated exercise write failure".to_string()));
        }

        let workout_exists = self
            .workouts
            .read()
            .await
            .iter()
            .any(|(id, _)| *id == exercise.workout_id);
        if !workout_exists {
            return Err(StoreError::NotFound(format!("workout {}", exercise.workout_id)));
        }

        let id = ExerciseId::new();
        self.exercises.write().await.push((id, exercise.clone()));
        Ok(id)
    }

    async fn list_active_plans(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<WorkoutPlanSummary>, StoreError> {
        self.record(StoreCall::ListActivePlans);
        if self.fail_plan_listing {
            return Err(StoreError::Backend("simulated plan listing failure".to_string()));
        }
        if self.user.as_ref() != Some(user_id) {
            return Ok(Vec::new());
        }
        Ok(self.plans.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fitness::DurationMinutes;
    use crate::domain::foundation::PlanId;
    use chrono::NaiveDate;

    fn user() -> UserId {
        UserId::new("athlete-1").unwrap()
    }

    fn workout_for(user_id: UserId) -> NewWorkout {
        NewWorkout::quick_entry(
            user_id,
            "rowing",
            DurationMinutes::new(15).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        )
    }

    #[tokio::test]
    async fn signed_out_store_has_no_user() {
        let store = InMemoryFitnessStore::new();
        assert_eq!(store.current_user().await.unwrap(), None);
        assert_eq!(store.calls(), vec![StoreCall::CurrentUser]);
    }

    #[tokio::test]
    async fn rejects_workout_for_other_user() {
        let store = InMemoryFitnessStore::new().with_user(user());
        let other = UserId::new("someone-else").unwrap();

        let result = store.create_workout(&workout_for(other)).await;

        assert!(matches!(result, Err(StoreError::Unauthorized)));
        assert!(store.workouts().await.is_empty());
    }

    #[tokio::test]
    async fn exercise_requires_existing_workout() {
        let store = InMemoryFitnessStore::new().with_user(user());
        let exercise = NewExercise::quick_entry(
            WorkoutId::new(),
            "rowing",
            DurationMinutes::new(15).unwrap(),
        );

        let result = store.create_exercise(&exercise).await;

        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn stores_workout_and_linked_exercise() {
        let store = InMemoryFitnessStore::new().with_user(user());

        let workout_id = store.create_workout(&workout_for(user())).await.unwrap();
        let exercise = NewExercise::quick_entry(
            workout_id,
            "rowing",
            DurationMinutes::new(15).unwrap(),
        );
        store.create_exercise(&exercise).await.unwrap();

        assert_eq!(store.workouts().await[0].0, workout_id);
        assert_eq!(store.exercises().await[0].1.workout_id, workout_id);
    }

    #[tokio::test]
    async fn plans_are_scoped_to_signed_in_user() {
        let plan = WorkoutPlanSummary::new(PlanId::new(), "Push Day", Some("chest".into()));
        let store = InMemoryFitnessStore::new()
            .with_user(user())
            .with_plans(vec![plan.clone()]);

        assert_eq!(store.list_active_plans(&user()).await.unwrap(), vec![plan]);
        let stranger = UserId::new("stranger").unwrap();
        assert!(store.list_active_plans(&stranger).await.unwrap().is_empty());
    }
}
