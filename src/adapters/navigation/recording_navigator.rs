//! Navigator that records every requested path.
//!
//! Stands in for a UI router in tests and in the demo binary.

use std::sync::Mutex;

use crate::ports::Navigator;

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths navigated to, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    /// The most recent path, if any.
    pub fn current(&self) -> Option<String> {
        self.visited.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path = %path, "Navigate");
        self.visited.lock().unwrap().push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_paths_in_order() {
        let navigator = RecordingNavigator::new();
        navigator.navigate("/dashboard");
        navigator.navigate("/dashboard/profile");

        assert_eq!(navigator.visited(), vec!["/dashboard", "/dashboard/profile"]);
        assert_eq!(navigator.current().as_deref(), Some("/dashboard/profile"));
    }
}
