//! StartPlanHandler - finds an active plan by spoken name or focus area.

use std::sync::Arc;

use super::{CommandError, NavigateHandler};
use crate::domain::fitness::{find_matching_plan, NavigationTarget, Screen};
use crate::domain::voice::{OutcomeMessage, PlanQuery};
use crate::ports::FitnessStore;

/// Handler for "start <query> workout plan".
///
/// Picks the first active plan whose name or focus area contains the query
/// (case-insensitive substring, in the store's order). With no match the user
/// lands on the plans list; that is a successful outcome, not a failure.
pub struct StartPlanHandler {
    store: Arc<dyn FitnessStore>,
    navigate: NavigateHandler,
}

impl StartPlanHandler {
    pub fn new(store: Arc<dyn FitnessStore>, navigate: NavigateHandler) -> Self {
        Self { store, navigate }
    }

    pub async fn handle(&self, query: &PlanQuery) -> Result<OutcomeMessage, CommandError> {
        let needle = query.non_empty()?;

        let user_id = self
            .store
            .current_user()
            .await?
            .ok_or(CommandError::Unauthenticated)?;

        let plans = self.store.list_active_plans(&user_id).await?;

        match find_matching_plan(&plans, needle) {
            Some(plan) => {
                tracing::info!(plan_id = %plan.id, query = needle, "Starting workout plan");
                self.navigate.go(NavigationTarget::PlanDetail(plan.id));
                Ok(OutcomeMessage::new(format!("Starting {}", plan.name)))
            }
            None => {
                tracing::info!(
                    query = needle,
                    candidates = plans.len(),
                    "No workout plan matched"
                );
                self.navigate.go(Screen::WorkoutPlans.into());
                Ok(OutcomeMessage::new(format!(
                    "No {} plan found, showing all plans",
                    needle
                )))
            }
        }
    }
}
