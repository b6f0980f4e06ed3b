//! NavigateHandler - sends the user to a fixed screen or a plan page.

use std::sync::Arc;

use crate::config::RouteConfig;
use crate::domain::fitness::{NavigationTarget, Screen};
use crate::domain::voice::OutcomeMessage;
use crate::ports::Navigator;

/// Handler for navigation-only voice commands.
#[derive(Clone)]
pub struct NavigateHandler {
    navigator: Arc<dyn Navigator>,
    routes: Arc<RouteConfig>,
}

impl NavigateHandler {
    pub fn new(navigator: Arc<dyn Navigator>, routes: Arc<RouteConfig>) -> Self {
        Self { navigator, routes }
    }

    /// Navigate to `screen` and return its confirmation. Cannot fail.
    pub fn handle(&self, screen: Screen) -> OutcomeMessage {
        self.go(screen.into());
        OutcomeMessage::new(screen.confirmation())
    }

    /// Resolve `target` to a path and hand it to the navigator.
    pub fn go(&self, target: NavigationTarget) {
        let path = self.routes.path_for(target);
        tracing::debug!(path = %path, "Navigating");
        self.navigator.navigate(&path);
    }
}
