//! QuickLogHandler - creates a workout + exercise pair from one voice command.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use super::CommandError;
use crate::domain::fitness::{NewExercise, NewWorkout};
use crate::domain::voice::{OutcomeMessage, QuickLogRequest};
use crate::ports::FitnessStore;

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Handler for "log <N> minutes of <exercise> today".
///
/// The two writes are not transactional. When the exercise write fails the
/// workout stays behind without an exercise and the error names it
/// ([`CommandError::OrphanedWorkout`]).
pub struct QuickLogHandler {
    store: Arc<dyn FitnessStore>,
    today: fn() -> NaiveDate,
}

impl QuickLogHandler {
    pub fn new(store: Arc<dyn FitnessStore>) -> Self {
        Self {
            store,
            today: utc_today,
        }
    }

    /// Override the date source used for `performed_on`.
    pub fn with_date_source(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn handle(&self, request: &QuickLogRequest) -> Result<OutcomeMessage, CommandError> {
        // 1. Validate before touching the store
        let duration = request.duration()?;
        let exercise_name = request.exercise_name()?;

        // 2. Resolve the caller
        let user_id = self
            .store
            .current_user()
            .await?
            .ok_or(CommandError::Unauthenticated)?;

        // 3. Workout first, then the exercise that references it
        let workout = NewWorkout::quick_entry(user_id, exercise_name, duration, (self.today)());
        let workout_id = self.store.create_workout(&workout).await?;

        let exercise = NewExercise::quick_entry(workout_id, exercise_name, duration);
        if let Err(source) = self.store.create_exercise(&exercise).await {
            tracing::warn!(
                workout_id = %workout_id,
                error = %source,
                "Exercise write failed after workout write; workout left without exercise"
            );
            return Err(CommandError::OrphanedWorkout { workout_id, source });
        }

        tracing::info!(
            workout_id = %workout_id,
            minutes = duration.get(),
            exercise = exercise_name,
            "Quick workout logged"
        );

        Ok(OutcomeMessage::new(format!(
            "Logged {} minutes of {}",
            duration, exercise_name
        )))
    }
}
