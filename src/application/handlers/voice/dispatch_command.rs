//! CommandDispatcher - match a transcript and run the matching executor.

use std::sync::Arc;

use super::{CommandError, NavigateHandler, QuickLogHandler, StartPlanHandler};
use crate::config::RouteConfig;
use crate::domain::voice::{
    CommandOutcome, IntentMatcher, MatchResult, OutcomeMessage, VoiceIntent,
};
use crate::ports::{FitnessStore, Navigator};

/// Runs one transcript through matcher and executor.
///
/// Executor errors stop here: they become a `Failed to <operation>` outcome
/// and a log line, never an `Err` for the caller.
pub struct CommandDispatcher {
    matcher: IntentMatcher,
    quick_log: QuickLogHandler,
    start_plan: StartPlanHandler,
    navigate: NavigateHandler,
    verbose_errors: bool,
}

impl CommandDispatcher {
    pub fn new(
        matcher: IntentMatcher,
        store: Arc<dyn FitnessStore>,
        navigator: Arc<dyn Navigator>,
        routes: Arc<RouteConfig>,
    ) -> Self {
        let navigate = NavigateHandler::new(navigator, routes);
        Self {
            matcher,
            quick_log: QuickLogHandler::new(store.clone()),
            start_plan: StartPlanHandler::new(store, navigate.clone()),
            navigate,
            verbose_errors: false,
        }
    }

    /// Replace the quick-log executor (e.g. to pin its date source).
    pub fn with_quick_log(mut self, quick_log: QuickLogHandler) -> Self {
        self.quick_log = quick_log;
        self
    }

    /// Append the underlying error to failure messages.
    pub fn with_verbose_errors(mut self, verbose_errors: bool) -> Self {
        self.verbose_errors = verbose_errors;
        self
    }

    /// Help text of every registered command, in priority order.
    pub fn commands(&self) -> Vec<String> {
        self.matcher.registry().descriptions()
    }

    pub async fn dispatch(&self, transcript: &str) -> CommandOutcome {
        match self.matcher.match_transcript(transcript) {
            MatchResult::Matched { intent, .. } => self.execute(intent).await,
            MatchResult::NoMatch { transcript } => {
                tracing::info!(transcript = %transcript, "Voice command not recognized");
                CommandOutcome::Unrecognized {
                    message: OutcomeMessage::unrecognized(&transcript),
                    transcript,
                }
            }
        }
    }

    /// Run the executor for an already-matched intent.
    pub async fn execute(&self, intent: VoiceIntent) -> CommandOutcome {
        let result = match &intent {
            VoiceIntent::QuickLog(request) => self.quick_log.handle(request).await,
            VoiceIntent::StartPlan(query) => self.start_plan.handle(query).await,
            VoiceIntent::Navigate { screen } => Ok(self.navigate.handle(*screen)),
        };

        match result {
            Ok(message) => {
                tracing::info!(intent = intent.name(), outcome = %message, "Voice command executed");
                CommandOutcome::Executed { intent, message }
            }
            Err(err) => {
                tracing::warn!(
                    intent = intent.name(),
                    code = %err.code(),
                    error = %err,
                    "Voice command failed"
                );
                let message = self.failure_message(&intent, &err);
                CommandOutcome::Failed {
                    error: err.to_domain_error(),
                    intent,
                    message,
                }
            }
        }
    }

    fn failure_message(&self, intent: &VoiceIntent, err: &CommandError) -> OutcomeMessage {
        let message = OutcomeMessage::failed(intent.operation());
        if self.verbose_errors {
            OutcomeMessage::new(format!("{}: {}", message, err))
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryFitnessStore, RecordingNavigator};
    use crate::domain::fitness::Screen;
    use crate::domain::foundation::{ErrorCode, UserId};

    fn setup(
        store: InMemoryFitnessStore,
    ) -> (CommandDispatcher, Arc<InMemoryFitnessStore>, Arc<RecordingNavigator>) {
        let store = Arc::new(store);
        let navigator = Arc::new(RecordingNavigator::new());
        let dispatcher = CommandDispatcher::new(
            IntentMatcher::default(),
            store.clone(),
            navigator.clone(),
            Arc::new(RouteConfig::default()),
        );
        (dispatcher, store, navigator)
    }

    fn signed_in() -> InMemoryFitnessStore {
        InMemoryFitnessStore::new().with_user(UserId::new("athlete-1").unwrap())
    }

    #[tokio::test]
    async fn unrecognized_transcript_touches_nothing() {
        let (dispatcher, store, navigator) = setup(signed_in());

        let outcome = dispatcher.dispatch("Order A Pizza").await;

        assert!(matches!(outcome, CommandOutcome::Unrecognized { .. }));
        assert_eq!(
            outcome.message().as_str(),
            "Command not recognized: \"Order A Pizza\""
        );
        assert!(store.calls().is_empty());
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn navigation_command_executes() {
        let (dispatcher, _, navigator) = setup(signed_in());

        let outcome = dispatcher.dispatch("Go to the dashboard").await;

        assert!(outcome.is_executed());
        assert_eq!(outcome.message().as_str(), "Navigating to dashboard");
        assert_eq!(
            outcome.intent(),
            Some(&VoiceIntent::Navigate {
                screen: Screen::Dashboard
            })
        );
        assert_eq!(navigator.visited(), vec!["/dashboard"]);
    }

    #[tokio::test]
    async fn quick_log_failure_becomes_message() {
        let (dispatcher, _, _) = setup(signed_in().failing_workout_writes());

        let outcome = dispatcher.dispatch("log 20 minutes of swimming today").await;

        match outcome {
            CommandOutcome::Failed { error, message, .. } => {
                assert_eq!(message.as_str(), "Failed to log workout");
                assert_eq!(error.code, ErrorCode::StoreError);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn replaced_quick_log_executor_is_used() {
        fn new_year() -> chrono::NaiveDate {
            chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        }
        let (dispatcher, store, _) = setup(signed_in());
        let dispatcher = dispatcher
            .with_quick_log(QuickLogHandler::new(store.clone()).with_date_source(new_year));

        let outcome = dispatcher.dispatch("log 25 minutes of rowing today").await;

        assert_eq!(outcome.message().as_str(), "Logged 25 minutes of rowing");
        assert_eq!(store.workouts().await[0].1.performed_on, new_year());
    }

    #[tokio::test]
    async fn plan_lookup_failure_becomes_message() {
        let (dispatcher, _, _) = setup(signed_in().failing_plan_listing());

        let outcome = dispatcher.dispatch("start chest workout plan").await;

        assert_eq!(outcome.message().as_str(), "Failed to find workout plan");
    }

    #[tokio::test]
    async fn zero_minutes_is_a_failure_not_a_no_match() {
        let (dispatcher, store, _) = setup(signed_in());

        let outcome = dispatcher.dispatch("log 0 minutes of running today").await;

        assert!(matches!(outcome, CommandOutcome::Failed { .. }));
        assert_eq!(outcome.message().as_str(), "Failed to log workout");
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn verbose_errors_append_cause() {
        let (dispatcher, _, _) = setup(InMemoryFitnessStore::new());
        let dispatcher = dispatcher.with_verbose_errors(true);

        let outcome = dispatcher.dispatch("log 5 minutes of yoga today").await;

        assert_eq!(
            outcome.message().as_str(),
            "Failed to log workout: No authenticated user"
        );
    }

    #[tokio::test]
    async fn lists_command_descriptions() {
        let (dispatcher, _, _) = setup(signed_in());
        let commands = dispatcher.commands();
        assert_eq!(commands.len(), 7);
        assert_eq!(commands[0], "Log [number] minutes of [exercise] today");
    }
}
