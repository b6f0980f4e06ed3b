//! VoiceSessionController - owns one recognition session and the status surface.
//!
//! ```text
//! Idle --start--> Listening --final--> Completed --end--> Idle
//!                     |  \--error--> Errored --end--> Idle
//!                     \--stop/end--> Idle
//! ```
//!
//! Every transition is validated against [`SessionPhase`]; provider events
//! that arrive in the wrong phase (a trailing result after `stop`, a second
//! result for one session) are ignored.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, watch};

use super::CommandDispatcher;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::domain::voice::{CommandOutcome, SessionPhase, SessionState, StatusSurface};
use crate::ports::{RecognitionError, RecognitionEvent, RecognitionOptions, RecognitionProvider};

/// What `start` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A session is already listening; nothing changed.
    AlreadyListening,
    /// Voice commands are unavailable; nothing changed.
    Unsupported,
}

/// Error type for the session controller
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
}

impl VoiceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            VoiceError::Recognition(RecognitionError::Unsupported) => {
                ErrorCode::RecognitionUnsupported
            }
            VoiceError::Recognition(RecognitionError::StartFailed(_)) => {
                ErrorCode::RecognitionFailed
            }
        }
    }

    pub fn to_domain_error(&self) -> DomainError {
        DomainError::new(self.code(), self.to_string())
    }
}

/// Cloneable handle that stops the session [`VoiceSessionController::run_session`]
/// is draining, from outside the task that owns the controller.
#[derive(Clone)]
pub struct StopHandle {
    requested: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.requested.send_replace(true);
    }
}

/// Drives a [`RecognitionProvider`] session and feeds final transcripts to
/// the [`CommandDispatcher`].
pub struct VoiceSessionController {
    provider: Arc<dyn RecognitionProvider>,
    dispatcher: Arc<CommandDispatcher>,
    options: RecognitionOptions,
    state: SessionState,
    status: watch::Sender<StatusSurface>,
    events: Option<mpsc::UnboundedReceiver<RecognitionEvent>>,
    stop_requested: Arc<watch::Sender<bool>>,
    last_outcome: Option<CommandOutcome>,
}

impl VoiceSessionController {
    pub fn new(
        provider: Arc<dyn RecognitionProvider>,
        dispatcher: Arc<CommandDispatcher>,
        options: RecognitionOptions,
    ) -> Self {
        let supported = provider.is_supported();
        if !supported {
            tracing::info!("Speech recognition unsupported; voice commands disabled");
        }
        let (status, _) = watch::channel(StatusSurface::new(supported));
        let (stop_requested, _) = watch::channel(false);
        Self {
            provider,
            dispatcher,
            options,
            state: SessionState::Idle,
            status,
            events: None,
            stop_requested: Arc::new(stop_requested),
            last_outcome: None,
        }
    }

    /// Turn the whole feature off regardless of provider support.
    pub fn with_enabled(self, enabled: bool) -> Self {
        if !enabled {
            self.status.send_modify(|status| status.is_supported = false);
        }
        self
    }

    pub fn is_supported(&self) -> bool {
        self.status.borrow().is_supported
    }

    pub fn is_listening(&self) -> bool {
        self.status.borrow().is_listening
    }

    /// Snapshot of the status surface.
    pub fn status(&self) -> StatusSurface {
        self.status.borrow().clone()
    }

    /// Receiver that observes every status change.
    pub fn subscribe(&self) -> watch::Receiver<StatusSurface> {
        self.status.subscribe()
    }

    /// Handle for stopping a session while `run_session` holds the controller.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            requested: self.stop_requested.clone(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Outcome of the most recent command, if any ran.
    pub fn last_outcome(&self) -> Option<&CommandOutcome> {
        self.last_outcome.as_ref()
    }

    /// Command help text; empty when voice commands are unsupported.
    pub fn commands(&self) -> Vec<String> {
        if self.is_supported() {
            self.dispatcher.commands()
        } else {
            Vec::new()
        }
    }

    /// Open a recognition session.
    ///
    /// Ignored while unsupported or while a session is listening.
    ///
    /// # Errors
    ///
    /// `VoiceError::Recognition` if the provider could not open a session;
    /// the controller is left as it was.
    pub fn start(&mut self) -> Result<StartOutcome, VoiceError> {
        if !self.is_supported() {
            tracing::debug!("Ignoring start: voice commands unsupported");
            return Ok(StartOutcome::Unsupported);
        }
        if !self.state.phase().can_transition_to(&SessionPhase::Listening) {
            tracing::debug!(phase = %self.state.phase(), "Ignoring start: already listening");
            return Ok(StartOutcome::AlreadyListening);
        }

        let (sink, events) = mpsc::unbounded_channel();
        if let Err(err) = self.provider.start(&self.options, sink) {
            let err = VoiceError::from(err);
            tracing::warn!(code = %err.code(), error = %err, "Speech recognition failed to start");
            return Err(err);
        }

        let listening = self.transition(SessionState::Listening);
        debug_assert!(listening, "start guard admitted a phase that cannot listen");
        self.stop_requested.send_replace(false);
        self.events = Some(events);
        self.status.send_modify(|status| {
            status.transcript.clear();
            status.is_listening = true;
        });
        tracing::debug!(language = %self.options.language, "Listening for voice command");
        Ok(StartOutcome::Started)
    }

    /// Stop listening. Optimistic: the status flips immediately and anything
    /// the provider still delivers is dropped. A command already running is
    /// not aborted. No-op when idle.
    pub fn stop(&mut self) {
        if self.state.phase() == SessionPhase::Idle {
            return;
        }
        self.provider.stop();
        self.events = None;
        self.transition(SessionState::Idle);
        self.status.send_modify(|status| status.is_listening = false);
    }

    /// Apply one provider event. Returns the command outcome when the event
    /// was a final transcript that got dispatched.
    pub async fn handle_event(&mut self, event: RecognitionEvent) -> Option<CommandOutcome> {
        match event {
            RecognitionEvent::Interim(text) => {
                if self.state.is_listening() && self.options.interim_results {
                    self.status.send_modify(|status| status.transcript = text);
                }
                None
            }
            RecognitionEvent::Final(text) => {
                if !self.transition(SessionState::Completed(text.clone())) {
                    return None;
                }
                self.status
                    .send_modify(|status| status.transcript = text.clone());

                let outcome = self.dispatcher.dispatch(&text).await;

                let message = outcome.message().to_string();
                self.status.send_modify(|status| status.last_outcome = message);
                self.last_outcome = Some(outcome.clone());
                Some(outcome)
            }
            RecognitionEvent::Error(reason) => {
                if self.transition(SessionState::Errored(reason.clone())) {
                    tracing::warn!(reason = %reason, "Speech recognition error");
                    self.status.send_modify(|status| status.is_listening = false);
                }
                None
            }
            RecognitionEvent::End => {
                self.events = None;
                if self.state.phase() == SessionPhase::Idle {
                    return None;
                }
                self.transition(SessionState::Idle);
                self.status.send_modify(|status| status.is_listening = false);
                None
            }
        }
    }

    /// Process provider events until the session ends or a [`StopHandle`]
    /// fires, in which case the session is stopped as by [`stop`](Self::stop).
    ///
    /// A provider that drops its sink without sending `End` is treated as
    /// having ended. Returns the outcome of the last command dispatched.
    pub async fn run_session(&mut self) -> Option<CommandOutcome> {
        let mut stop_requested = self.stop_requested.subscribe();
        let mut last = None;
        loop {
            if *stop_requested.borrow_and_update() {
                tracing::debug!("Stop requested while listening");
                self.stop();
                break;
            }
            let events = match self.events.as_mut() {
                Some(events) => events,
                None => break,
            };

            let event = tokio::select! {
                event = events.recv() => event.unwrap_or(RecognitionEvent::End),
                _ = stop_requested.changed() => continue,
            };
            let ended = event == RecognitionEvent::End;
            if let Some(outcome) = self.handle_event(event).await {
                last = Some(outcome);
            }
            if ended {
                break;
            }
        }
        last
    }

    fn transition(&mut self, next: SessionState) -> bool {
        let from = self.state.phase();
        match from.transition_to(next.phase()) {
            Ok(to) => {
                tracing::debug!(from = %from, to = %to, "Voice session transition");
                self.state = next;
                true
            }
            Err(err) => {
                tracing::debug!(
                    code = %ErrorCode::InvalidStateTransition,
                    error = %err,
                    "Ignoring voice session event"
                );
                false
            }
        }
    }
}
