//! Fitness module - the slice of the fitness domain that voice commands touch.
//!
//! Workouts and exercises are only ever created here; plans are only read.

mod navigation;
mod plan;
mod workout;

pub use navigation::{NavigationTarget, Screen};
pub use plan::{find_matching_plan, WorkoutPlanSummary};
pub use workout::{DurationMinutes, NewExercise, NewWorkout, VOICE_WORKOUT_NOTE};
