//! Status surface read by the UI layer.

use serde::{Deserialize, Serialize};

/// Externally observable voice state. Only the session controller writes it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSurface {
    pub is_listening: bool,
    pub is_supported: bool,
    /// Last transcript heard (interim or final).
    pub transcript: String,
    /// Message from the most recent command; overwritten, never appended.
    pub last_outcome: String,
}

impl StatusSurface {
    pub fn new(is_supported: bool) -> Self {
        Self {
            is_supported,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_idle_and_empty() {
        let status = StatusSurface::new(true);
        assert!(status.is_supported);
        assert!(!status.is_listening);
        assert!(status.transcript.is_empty());
        assert!(status.last_outcome.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(StatusSurface::new(false)).unwrap();
        assert_eq!(json["isListening"], false);
        assert_eq!(json["isSupported"], false);
        assert_eq!(json["lastOutcome"], "");
    }
}
