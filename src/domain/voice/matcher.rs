//! Intent matcher - maps a transcript to the first matching command rule.

use std::sync::Arc;

use super::intent::VoiceIntent;
use super::registry::CommandRegistry;

/// Result of matching one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Matched {
        intent: VoiceIntent,
        /// Description of the rule that matched.
        description: String,
    },
    /// Nothing matched; carries the transcript exactly as heard.
    NoMatch { transcript: String },
}

/// Trims and lower-cases a transcript before matching.
pub fn normalize(transcript: &str) -> String {
    transcript.trim().to_lowercase()
}

/// First-match-wins matcher over a shared [`CommandRegistry`].
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    registry: Arc<CommandRegistry>,
}

impl IntentMatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn match_transcript(&self, transcript: &str) -> MatchResult {
        let normalized = normalize(transcript);

        match self.registry.find(&normalized) {
            Some((rule, intent)) => {
                tracing::debug!(
                    rule = rule.description(),
                    intent = intent.name(),
                    "Matched voice command"
                );
                MatchResult::Matched {
                    intent,
                    description: rule.description().to_string(),
                }
            }
            None => {
                tracing::debug!(transcript, "No voice command matched");
                MatchResult::NoMatch {
                    transcript: transcript.to_string(),
                }
            }
        }
    }
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new(Arc::new(CommandRegistry::standard()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fitness::Screen;
    use crate::domain::voice::QuickLogRequest;
    use proptest::prelude::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Go To The Dashboard \n"), "go to the dashboard");
    }

    #[test]
    fn matches_mixed_case_transcript() {
        let matcher = IntentMatcher::default();
        let result = matcher.match_transcript("  Log 45 Minutes of Cycling TODAY ");
        assert_eq!(
            result,
            MatchResult::Matched {
                intent: VoiceIntent::QuickLog(QuickLogRequest::new("45", "cycling")),
                description: "Log [number] minutes of [exercise] today".to_string(),
            }
        );
    }

    #[test]
    fn no_match_keeps_original_transcript() {
        let matcher = IntentMatcher::default();
        let result = matcher.match_transcript("  Play Some MUSIC ");
        assert_eq!(
            result,
            MatchResult::NoMatch {
                transcript: "  Play Some MUSIC ".to_string()
            }
        );
    }

    #[test]
    fn malformed_duration_is_a_no_match() {
        let matcher = IntentMatcher::default();
        assert!(matches!(
            matcher.match_transcript("log abc minutes of running today"),
            MatchResult::NoMatch { .. }
        ));
    }

    #[test]
    fn navigation_match_reports_rule_description() {
        let matcher = IntentMatcher::default();
        match matcher.match_transcript("Show me my profile") {
            MatchResult::Matched {
                intent,
                description,
            } => {
                assert_eq!(intent, VoiceIntent::Navigate { screen: Screen::Profile });
                assert_eq!(description, "Show me my profile");
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn digits_only_transcripts_never_match(text in "[0-9 ]{0,24}") {
            let matcher = IntentMatcher::default();
            prop_assert_eq!(
                matcher.match_transcript(&text),
                MatchResult::NoMatch { transcript: text.clone() }
            );
        }

        #[test]
        fn any_positive_quick_log_phrase_matches(minutes in 1u32..10_000, exercise in "[a-z]{1,12}( [a-z]{1,12})?") {
            let matcher = IntentMatcher::default();
            let text = format!("Log {} minutes of {} today", minutes, exercise);
            prop_assert_eq!(
                matcher.match_transcript(&text),
                MatchResult::Matched {
                    intent: VoiceIntent::QuickLog(QuickLogRequest::new(minutes.to_string(), &exercise)),
                    description: "Log [number] minutes of [exercise] today".to_string(),
                }
            );
        }
    }
}
