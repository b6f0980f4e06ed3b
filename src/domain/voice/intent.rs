//! Typed voice intents and their parameter records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::fitness::{DurationMinutes, Screen};
use crate::domain::foundation::ValidationError;

/// A recognized user request, carrying its parsed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "params", rename_all = "snake_case")]
pub enum VoiceIntent {
    /// "log 30 minutes of running today"
    QuickLog(QuickLogRequest),
    /// "start chest workout plan"
    StartPlan(PlanQuery),
    /// Any of the fixed navigation phrases.
    Navigate { screen: Screen },
}

impl VoiceIntent {
    /// Short stable name, used as a log field.
    pub fn name(&self) -> &'static str {
        match self {
            VoiceIntent::QuickLog(_) => "quick_log",
            VoiceIntent::StartPlan(_) => "start_plan",
            VoiceIntent::Navigate { .. } => "navigate",
        }
    }

    /// Human wording of the operation, as in "Failed to <operation>".
    pub fn operation(&self) -> &'static str {
        match self {
            VoiceIntent::QuickLog(_) => "log workout",
            VoiceIntent::StartPlan(_) => "find workout plan",
            VoiceIntent::Navigate { .. } => "navigate",
        }
    }
}

/// Parameters captured by the quick-log phrase.
///
/// The duration is kept as spoken digits; converting it to a positive
/// [`DurationMinutes`] is the executor's job so that "0 minutes" reports a
/// failure instead of being treated as an unknown command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLogRequest {
    pub duration_text: String,
    pub exercise_name: String,
}

impl QuickLogRequest {
    pub fn new(duration_text: impl Into<String>, exercise_name: impl AsRef<str>) -> Self {
        Self {
            duration_text: duration_text.into(),
            exercise_name: exercise_name.as_ref().trim().to_string(),
        }
    }

    pub fn duration(&self) -> Result<DurationMinutes, ValidationError> {
        DurationMinutes::parse(&self.duration_text)
    }

    pub fn exercise_name(&self) -> Result<&str, ValidationError> {
        if self.exercise_name.is_empty() {
            return Err(ValidationError::empty_field("exercise_name"));
        }
        Ok(&self.exercise_name)
    }
}

/// Spoken plan name or focus area to look up, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanQuery(String);

impl PlanQuery {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self(query.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The query, rejecting a blank one (it would match every plan).
    pub fn non_empty(&self) -> Result<&str, ValidationError> {
        if self.0.is_empty() {
            return Err(ValidationError::empty_field("plan_query"));
        }
        Ok(&self.0)
    }
}

impl fmt::Display for PlanQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
