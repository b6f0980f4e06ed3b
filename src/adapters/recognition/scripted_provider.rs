//! Scripted recognition provider.
//!
//! Replays queued sessions instead of listening to a microphone. Each call to
//! `start` consumes the next script and pushes its events into the sink.
//! With no script queued the session stays open until `stop`.
//!
//! # Example
//!
//! ```ignore
//! let provider = ScriptedRecognitionProvider::new();
//! provider.push_utterance("go to dashboard");
//!
//! controller.start()?;
//! controller.run_session().await;
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::{
    RecognitionError, RecognitionEvent, RecognitionEventSink, RecognitionOptions,
    RecognitionProvider,
};

#[derive(Debug)]
pub struct ScriptedRecognitionProvider {
    supported: bool,
    start_failure: Option<String>,
    scripts: Mutex<VecDeque<Vec<RecognitionEvent>>>,
    open_session: Mutex<Option<RecognitionEventSink>>,
    starts: Mutex<usize>,
    stops: Mutex<usize>,
}

impl Default for ScriptedRecognitionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedRecognitionProvider {
    /// Creates a supported provider with no scripts queued.
    pub fn new() -> Self {
        Self {
            supported: true,
            start_failure: None,
            scripts: Mutex::new(VecDeque::new()),
            open_session: Mutex::new(None),
            starts: Mutex::new(0),
            stops: Mutex::new(0),
        }
    }

    /// A provider on a platform without speech recognition.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    /// A supported provider whose `start` always fails with `reason`.
    pub fn failing_to_start(reason: impl Into<String>) -> Self {
        Self {
            start_failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Queue a session that hears `text` once and ends.
    pub fn push_utterance(&self, text: impl Into<String>) {
        self.push_script(vec![
            RecognitionEvent::Final(text.into()),
            RecognitionEvent::End,
        ]);
    }

    /// Queue a session that emits exactly `events`, then closes its sink.
    pub fn push_script(&self, events: Vec<RecognitionEvent>) {
        self.scripts.lock().unwrap().push_back(events);
    }

    pub fn start_count(&self) -> usize {
        *self.starts.lock().unwrap()
    }

    pub fn stop_count(&self) -> usize {
        *self.stops.lock().unwrap()
    }
}

impl RecognitionProvider for ScriptedRecognitionProvider {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start(
        &self,
        options: &RecognitionOptions,
        events: RecognitionEventSink,
    ) -> Result<(), RecognitionError> {
        if !self.supported {
            return Err(RecognitionError::Unsupported);
        }
        if let Some(reason) = &self.start_failure {
            return Err(RecognitionError::StartFailed(reason.clone()));
        }
        *self.starts.lock().unwrap() += 1;

        let script = self.scripts.lock().unwrap().pop_front();
        match script {
            Some(script) => {
                tracing::debug!(
                    language = %options.language,
                    events = script.len(),
                    "Replaying scripted recognition session"
                );
                for event in script {
                    // Receiver gone means the session was already abandoned
                    if events.send(event).is_err() {
                        break;
                    }
                }
            }
            None => {
                *self.open_session.lock().unwrap() = Some(events);
            }
        }
        Ok(())
    }

    fn stop(&self) {
        *self.stops.lock().unwrap() += 1;
        if let Some(events) = self.open_session.lock().unwrap().take() {
            let _ = events.send(RecognitionEvent::End);
        }
    }
}
