//! Command registry - the ordered catalogue of recognizable voice commands.
//!
//! Rules are evaluated in registration order and the first match wins, so
//! the catalogue must stay ordered from most specific to least specific.
//! A looser rule registered ahead of a specific one will shadow it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use super::intent::{PlanQuery, QuickLogRequest, VoiceIntent};
use crate::domain::fitness::Screen;

/// Builds a typed intent from a successful pattern match.
pub type IntentParser = fn(&Captures<'_>) -> VoiceIntent;

/// One recognizable command: a whole-phrase pattern, its parser and help text.
#[derive(Debug, Clone)]
pub struct CommandRule {
    pattern: Regex,
    description: String,
    parse: IntentParser,
}

impl CommandRule {
    /// Compiles `pattern` case-insensitively.
    ///
    /// Patterns are applied to normalized (trimmed, lower-cased) text and
    /// should be anchored with `^...$` to match the whole phrase.
    pub fn new(
        pattern: &str,
        description: impl Into<String>,
        parse: IntentParser,
    ) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            pattern,
            description: description.into(),
            parse,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the parsed intent if `normalized` matches this rule.
    pub fn try_match(&self, normalized: &str) -> Option<VoiceIntent> {
        self.pattern
            .captures(normalized)
            .map(|captures| (self.parse)(&captures))
    }
}

fn group<'t>(captures: &Captures<'t>, index: usize) -> &'t str {
    captures.get(index).map_or("", |m| m.as_str())
}

fn quick_log(captures: &Captures<'_>) -> VoiceIntent {
    VoiceIntent::QuickLog(QuickLogRequest::new(group(captures, 1), group(captures, 2)))
}

fn start_plan(captures: &Captures<'_>) -> VoiceIntent {
    VoiceIntent::StartPlan(PlanQuery::new(group(captures, 1)))
}

fn show_analytics(_: &Captures<'_>) -> VoiceIntent {
    VoiceIntent::Navigate {
        screen: Screen::Analytics,
    }
}

fn go_to_dashboard(_: &Captures<'_>) -> VoiceIntent {
    VoiceIntent::Navigate {
        screen: Screen::Dashboard,
    }
}

fn show_plans(_: &Captures<'_>) -> VoiceIntent {
    VoiceIntent::Navigate {
        screen: Screen::WorkoutPlans,
    }
}

fn log_workout(_: &Captures<'_>) -> VoiceIntent {
    VoiceIntent::Navigate {
        screen: Screen::LogWorkout,
    }
}

fn show_profile(_: &Captures<'_>) -> VoiceIntent {
    VoiceIntent::Navigate {
        screen: Screen::Profile,
    }
}

/// Built-in rules in priority order.
static STANDARD_RULES: Lazy<Vec<CommandRule>> = Lazy::new(|| {
    let table: [(&str, &str, IntentParser); 7] = [
        (
            r"^log (\d+) minutes? of (.+) today$",
            "Log [number] minutes of [exercise] today",
            quick_log,
        ),
        (
            r"^show (?:me )?(?:my )?weekly progress$",
            "Show me my weekly progress",
            show_analytics,
        ),
        (
            r"^start (.+) workout(?: plan)?$",
            "Start [workout type] workout plan",
            start_plan,
        ),
        (r"^go to (?:the )?dashboard$", "Go to dashboard", go_to_dashboard),
        (
            r"^show (?:me )?(?:my )?workout plans$",
            "Show me my workout plans",
            show_plans,
        ),
        (r"^log (?:a )?(?:new )?workout$", "Log a new workout", log_workout),
        (r"^show (?:me )?(?:my )?profile$", "Show me my profile", show_profile),
    ];

    table
        .into_iter()
        .map(|(pattern, description, parse)| {
            CommandRule::new(pattern, description, parse)
                .expect("built-in voice command pattern must compile")
        })
        .collect()
});

/// Ordered list of command rules. The order is never changed after a rule
/// is registered; new rules go to the end (lowest priority).
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    rules: Vec<CommandRule>,
}

impl CommandRegistry {
    /// Registry holding the built-in fitness commands.
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.clone(),
        }
    }

    /// Registry with no rules; every transcript is unrecognized.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule after all existing rules.
    pub fn register(&mut self, rule: CommandRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_rule(mut self, rule: CommandRule) -> Self {
        self.register(rule);
        self
    }

    pub fn rules(&self) -> &[CommandRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Help text for every rule, in priority order.
    pub fn descriptions(&self) -> Vec<String> {
        self.rules
            .iter()
            .map(|rule| rule.description.clone())
            .collect()
    }

    /// First rule matching already-normalized text, with its parsed intent.
    pub fn find(&self, normalized: &str) -> Option<(&CommandRule, VoiceIntent)> {
        self.rules
            .iter()
            .find_map(|rule| rule.try_match(normalized).map(|intent| (rule, intent)))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
