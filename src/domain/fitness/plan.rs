//! Read-only view of a user's active workout plan.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PlanId;

/// Summary of an active workout plan, as returned by the fitness store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlanSummary {
    pub id: PlanId,
    pub name: String,
    /// Focus area tag of the plan's template (`chest`, `full_body`, ...).
    /// Plans without a template carry none.
    pub focus_area: Option<String>,
}

impl WorkoutPlanSummary {
    pub fn new(id: PlanId, name: impl Into<String>, focus_area: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            focus_area,
        }
    }

    /// True when the name or focus area contains `query`, ignoring case.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .focus_area
                .as_deref()
                .is_some_and(|area| area.to_lowercase().contains(&needle))
    }
}

/// Returns the first plan matching `query`, in the order given.
pub fn find_matching_plan<'a>(
    plans: &'a [WorkoutPlanSummary],
    query: &str,
) -> Option<&'a WorkoutPlanSummary> {
    plans.iter().find(|plan| plan.matches_query(query))
}
