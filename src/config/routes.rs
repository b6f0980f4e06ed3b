//! Navigation route configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::fitness::{NavigationTarget, Screen};

/// Paths the navigator is sent to
#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    #[serde(default = "default_dashboard")]
    pub dashboard: String,

    #[serde(default = "default_analytics")]
    pub analytics: String,

    /// Plans list; a plan's detail page is `<workout_plans>/<plan id>`
    #[serde(default = "default_workout_plans")]
    pub workout_plans: String,

    #[serde(default = "default_log_workout")]
    pub log_workout: String,

    #[serde(default = "default_profile")]
    pub profile: String,
}

impl RouteConfig {
    /// Resolve a navigation target to a path
    pub fn path_for(&self, target: NavigationTarget) -> String {
        match target {
            NavigationTarget::Screen(screen) => self.screen_path(screen).to_string(),
            NavigationTarget::PlanDetail(plan_id) => {
                format!("{}/{}", self.workout_plans.trim_end_matches('/'), plan_id)
            }
        }
    }

    fn screen_path(&self, screen: Screen) -> &str {
        match screen {
            Screen::Dashboard => &self.dashboard,
            Screen::Analytics => &self.analytics,
            Screen::WorkoutPlans => &self.workout_plans,
            Screen::LogWorkout => &self.log_workout,
            Screen::Profile => &self.profile,
        }
    }

    /// Validate route configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for path in [
            &self.dashboard,
            &self.analytics,
            &self.workout_plans,
            &self.log_workout,
            &self.profile,
        ] {
            if !path.starts_with('/') {
                return Err(ValidationError::InvalidRoutePath(path.clone()));
            }
        }
        Ok(())
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            dashboard: default_dashboard(),
            analytics: default_analytics(),
            workout_plans: default_workout_plans(),
            log_workout: default_log_workout(),
            profile: default_profile(),
        }
    }
}

fn default_dashboard() -> String {
    "/dashboard".to_string()
}

fn default_analytics() -> String {
    "/dashboard/analytics".to_string()
}

fn default_workout_plans() -> String {
    "/dashboard/workout-plans".to_string()
}

fn default_log_workout() -> String {
    "/dashboard/log-workout".to_string()
}

fn default_profile() -> String {
    "/dashboard/profile".to_string()
}
