//! Quick-entry workout records created from a single voice command.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{UserId, ValidationError, WorkoutId};

/// Note attached to every workout created by voice.
pub const VOICE_WORKOUT_NOTE: &str = "Added via voice command";

/// Positive workout duration in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    /// Creates a duration, rejecting zero.
    pub fn new(minutes: u32) -> Result<Self, ValidationError> {
        if minutes == 0 {
            return Err(ValidationError::out_of_range(
                "duration_minutes",
                1,
                u64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self(minutes))
    }

    /// Parses spoken digits ("30") into a duration.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let minutes = text.trim().parse::<u32>().map_err(|e| {
            ValidationError::invalid_format("duration_minutes", e.to_string())
        })?;
        Self::new(minutes)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields for a workout record insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkout {
    pub user_id: UserId,
    pub name: String,
    pub duration_minutes: DurationMinutes,
    pub notes: String,
    pub performed_on: NaiveDate,
}

impl NewWorkout {
    /// Builds the minimal workout for a quick entry, named `Quick <exercise>`.
    pub fn quick_entry(
        user_id: UserId,
        exercise_name: &str,
        duration: DurationMinutes,
        performed_on: NaiveDate,
    ) -> Self {
        Self {
            user_id,
            name: format!("Quick {}", exercise_name),
            duration_minutes: duration,
            notes: VOICE_WORKOUT_NOTE.to_string(),
            performed_on,
        }
    }
}

/// Fields for an exercise record insert, linked to a workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExercise {
    pub workout_id: WorkoutId,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub notes: String,
}

impl NewExercise {
    /// Builds the single-set exercise for a quick entry; the note encodes the duration.
    pub fn quick_entry(workout_id: WorkoutId, exercise_name: &str, duration: DurationMinutes) -> Self {
        Self {
            workout_id,
            name: exercise_name.to_string(),
            sets: 1,
            reps: 1,
            notes: format!("{} minutes", duration),
        }
    }
}
