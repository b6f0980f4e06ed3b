//! Application screens a voice command can navigate to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::PlanId;

/// A fixed application screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Dashboard,
    Analytics,
    WorkoutPlans,
    LogWorkout,
    Profile,
}

impl Screen {
    /// Confirmation shown after navigating to this screen by voice.
    pub fn confirmation(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Navigating to dashboard",
            Screen::Analytics => "Navigating to weekly progress",
            Screen::WorkoutPlans => "Navigating to workout plans",
            Screen::LogWorkout => "Opening workout logger",
            Screen::Profile => "Navigating to profile",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Screen::Dashboard => "dashboard",
            Screen::Analytics => "analytics",
            Screen::WorkoutPlans => "workout_plans",
            Screen::LogWorkout => "log_workout",
            Screen::Profile => "profile",
        };
        write!(f, "{}", s)
    }
}

/// Where a navigation request points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationTarget {
    Screen(Screen),
    PlanDetail(PlanId),
}

impl From<Screen> for NavigationTarget {
    fn from(screen: Screen) -> Self {
        NavigationTarget::Screen(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmations_match_screen() {
        assert_eq!(Screen::Dashboard.confirmation(), "Navigating to dashboard");
        assert_eq!(Screen::Analytics.confirmation(), "Navigating to weekly progress");
        assert_eq!(Screen::WorkoutPlans.confirmation(), "Navigating to workout plans");
        assert_eq!(Screen::LogWorkout.confirmation(), "Opening workout logger");
        assert_eq!(Screen::Profile.confirmation(), "Navigating to profile");
    }

    #[test]
    fn screen_serializes_snake_case() {
        let json = serde_json::to_string(&Screen::LogWorkout).unwrap();
        assert_eq!(json, "\"log_workout\"");
    }
}
