//! Voice capture controller — the start/stop toggle and the event contract.
//!
//! [`VoiceController`] owns at most one live [`RecognitionSession`] at a
//! time.  A finalized transcript overwrites the prompt field wholesale
//! (last-writer-wins, no append); every other outcome just deactivates the
//! session and tells the user what happened.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::config::RecognitionConfig;
use crate::form::FormState;
use crate::notify::{Notification, Notifier};
use crate::voice::recognizer::{
    RecognitionEvent, RecognitionSession, SpeechBackend, VoiceError,
};

// ---------------------------------------------------------------------------
// VoiceController
// ---------------------------------------------------------------------------

/// Bridges the speech capability to the free-text prompt field.
///
/// The frontend calls [`toggle`](Self::toggle) on mic-button presses and
/// feeds every [`RecognitionEvent`] drained from the channel into
/// [`handle_event`](Self::handle_event).
pub struct VoiceController {
    backend: Box<dyn SpeechBackend>,
    settings: RecognitionConfig,
    events_tx: Sender<RecognitionEvent>,
    notifier: Arc<dyn Notifier>,
    session: Option<Box<dyn RecognitionSession>>,
    active: bool,
}

impl VoiceController {
    /// Create a new controller.
    ///
    /// * `backend`   — platform capability probe/factory.
    /// * `settings`  — session settings (locale, single-utterance,
    ///   final-results-only).
    /// * `events_tx` — sender handed to each created session; the frontend
    ///   drains the matching receiver into [`handle_event`](Self::handle_event).
    /// * `notifier`  — toast sink.
    pub fn new(
        backend: Box<dyn SpeechBackend>,
        settings: RecognitionConfig,
        events_tx: Sender<RecognitionEvent>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            backend,
            settings,
            events_tx,
            notifier,
            session: None,
            active: false,
        }
    }

    /// `true` while a session is actively listening.
    pub fn is_active(&self) -> bool {
        self.active
    }

    // -----------------------------------------------------------------------
    // toggle
    // -----------------------------------------------------------------------

    /// Start or stop voice capture.
    ///
    /// With no capability present this emits the unsupported notification and
    /// changes nothing.  When listening, the session is asked to stop and the
    /// controller goes inactive immediately.  When idle, a fresh session is
    /// created and started; any stale (already-ended) session is aborted
    /// first so at most one session is ever live.
    pub fn toggle(&mut self) -> Result<(), VoiceError> {
        if self.active {
            log::debug!("voice: toggle → stopping active session");
            if let Some(session) = self.session.as_mut() {
                session.stop();
            }
            self.active = false;
            return Ok(());
        }

        // Replace any stale session before creating the next one.
        if let Some(mut stale) = self.session.take() {
            stale.abort();
        }

        match self.backend.create(&self.settings, self.events_tx.clone()) {
            None => {
                log::info!("voice: speech capability absent on this host");
                self.notifier.notify(Notification::error(
                    "Voice Recognition Not Supported",
                    "Voice input is unavailable here. Please type your question instead.",
                ));
                Err(VoiceError::Unsupported)
            }
            Some(mut session) => {
                log::debug!(
                    "voice: toggle → starting session (locale {})",
                    self.settings.locale
                );
                session.start();
                self.session = Some(session);
                Ok(())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Event contract
    // -----------------------------------------------------------------------

    /// Apply one session event.
    ///
    /// `Result` writes the transcript into `form.free_text_prompt` verbatim,
    /// discarding whatever was there before.
    pub fn handle_event(&mut self, event: RecognitionEvent, form: &mut FormState) {
        match event {
            RecognitionEvent::Started => {
                self.active = true;
                self.notifier.notify(Notification::info(
                    "Listening...",
                    "Speak your debugging question now",
                ));
            }

            RecognitionEvent::Result { transcript } => {
                log::debug!("voice: finalized transcript ({} chars)", transcript.len());
                form.free_text_prompt = transcript.clone();
                self.active = false;
                self.session = None;
                self.notifier.notify(Notification::success(
                    "Voice Captured",
                    format!("Understood: \"{transcript}\""),
                ));
            }

            RecognitionEvent::Error { message } => {
                log::warn!("voice: recognition error: {message}");
                self.active = false;
                self.session = None;
                self.notifier.notify(Notification::error(
                    "Voice Recognition Error",
                    "Failed to capture voice. Please try again.",
                ));
            }

            RecognitionEvent::Ended => {
                // Nothing to report if a result or error already handled it.
                if self.active {
                    self.active = false;
                }
                self.session = None;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::voice::recognizer::UnsupportedBackend;
    use std::sync::Mutex;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Records every lifecycle call made against sessions from this backend.
    #[derive(Default)]
    struct CallLog {
        created: usize,
        calls: Vec<&'static str>,
    }

    struct FakeBackend {
        log: Arc<Mutex<CallLog>>,
    }

    struct FakeSession {
        log: Arc<Mutex<CallLog>>,
    }

    impl RecognitionSession for FakeSession {
        fn start(&mut self) {
            self.log.lock().unwrap().calls.push("start");
        }
        fn stop(&mut self) {
            self.log.lock().unwrap().calls.push("stop");
        }
        fn abort(&mut self) {
            self.log.lock().unwrap().calls.push("abort");
        }
    }

    impl SpeechBackend for FakeBackend {
        fn create(
            &self,
            _settings: &RecognitionConfig,
            _events: Sender<RecognitionEvent>,
        ) -> Option<Box<dyn RecognitionSession>> {
            self.log.lock().unwrap().created += 1;
            Some(Box::new(FakeSession {
                log: Arc::clone(&self.log),
            }))
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn make_controller(
        backend: Box<dyn SpeechBackend>,
    ) -> (VoiceController, Arc<RecordingNotifier>) {
        let (tx, _rx) = std::sync::mpsc::channel();
        let notifier = Arc::new(RecordingNotifier::new());
        let controller = VoiceController::new(
            backend,
            RecognitionConfig::default(),
            tx,
            notifier.clone(),
        );
        (controller, notifier)
    }

    fn fake_controller() -> (VoiceController, Arc<RecordingNotifier>, Arc<Mutex<CallLog>>) {
        let log = Arc::new(Mutex::new(CallLog::default()));
        let (controller, notifier) = make_controller(Box::new(FakeBackend {
            log: Arc::clone(&log),
        }));
        (controller, notifier, log)
    }

    // -----------------------------------------------------------------------
    // Capability probing
    // -----------------------------------------------------------------------

    /// Toggling with no capability must never mutate `active` and always
    /// emit the unsupported notification.
    #[test]
    fn unsupported_toggle_is_inert_and_notifies() {
        let (mut controller, notifier) = make_controller(Box::new(UnsupportedBackend));

        let err = controller.toggle().unwrap_err();

        assert_eq!(err, VoiceError::Unsupported);
        assert!(!controller.is_active());
        assert_eq!(notifier.titles(), vec!["Voice Recognition Not Supported"]);

        // A second attempt behaves identically.
        assert!(controller.toggle().is_err());
        assert!(!controller.is_active());
    }

    // -----------------------------------------------------------------------
    // Toggle lifecycle
    // -----------------------------------------------------------------------

    #[test]
    fn toggle_on_creates_and_starts_one_session() {
        let (mut controller, _notifier, log) = fake_controller();

        controller.toggle().unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.created, 1);
        assert_eq!(log.calls, vec!["start"]);
    }

    #[test]
    fn toggle_while_active_stops_the_session() {
        let (mut controller, _notifier, log) = fake_controller();
        let mut form = FormState::default();

        controller.toggle().unwrap();
        controller.handle_event(RecognitionEvent::Started, &mut form);
        assert!(controller.is_active());

        controller.toggle().unwrap();

        assert!(!controller.is_active());
        assert_eq!(log.lock().unwrap().calls, vec!["start", "stop"]);
    }

    /// Two toggle-ons without a Started event in between: the stale session
    /// is aborted so only one session is ever live.
    #[test]
    fn stale_session_is_aborted_before_a_new_one() {
        let (mut controller, _notifier, log) = fake_controller();

        controller.toggle().unwrap();
        controller.toggle().unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.created, 2);
        assert_eq!(log.calls, vec!["start", "abort", "start"]);
    }

    // -----------------------------------------------------------------------
    // Event contract
    // -----------------------------------------------------------------------

    #[test]
    fn started_event_marks_active_and_notifies_listening() {
        let (mut controller, notifier, _log) = fake_controller();
        let mut form = FormState::default();

        controller.toggle().unwrap();
        controller.handle_event(RecognitionEvent::Started, &mut form);

        assert!(controller.is_active());
        assert_eq!(notifier.titles(), vec!["Listening..."]);
    }

    /// A finalized transcript overwrites the prompt wholesale, discarding
    /// prior text.
    #[test]
    fn result_overwrites_prompt_and_deactivates() {
        let (mut controller, notifier, _log) = fake_controller();
        let mut form = FormState::default();
        form.free_text_prompt = "half-typed question".into();

        controller.toggle().unwrap();
        controller.handle_event(RecognitionEvent::Started, &mut form);
        controller.handle_event(
            RecognitionEvent::Result {
                transcript: "print hello".into(),
            },
            &mut form,
        );

        assert_eq!(form.free_text_prompt, "print hello");
        assert!(!controller.is_active());

        let seen = notifier.seen();
        assert_eq!(seen.last().unwrap().title, "Voice Captured");
        assert!(seen.last().unwrap().body.contains("print hello"));
    }

    #[test]
    fn error_event_deactivates_and_notifies() {
        let (mut controller, notifier, _log) = fake_controller();
        let mut form = FormState::default();
        form.free_text_prompt = "keep me".into();

        controller.toggle().unwrap();
        controller.handle_event(RecognitionEvent::Started, &mut form);
        controller.handle_event(
            RecognitionEvent::Error {
                message: "no-speech".into(),
            },
            &mut form,
        );

        assert!(!controller.is_active());
        // A failed capture must not clobber the typed prompt.
        assert_eq!(form.free_text_prompt, "keep me");
        assert_eq!(notifier.titles().last().unwrap(), "Voice Recognition Error");
    }

    /// `Ended` with no prior result/error: the session just goes inactive,
    /// silently.
    #[test]
    fn ended_without_result_is_silent() {
        let (mut controller, notifier, _log) = fake_controller();
        let mut form = FormState::default();

        controller.toggle().unwrap();
        controller.handle_event(RecognitionEvent::Started, &mut form);
        let notifications_before = notifier.seen().len();

        controller.handle_event(RecognitionEvent::Ended, &mut form);

        assert!(!controller.is_active());
        assert_eq!(notifier.seen().len(), notifications_before);
        assert!(form.free_text_prompt.is_empty());
    }

    /// After a completed capture, a new toggle starts a fresh session — no
    /// transcript carries over.
    #[test]
    fn sessions_do_not_share_state() {
        let (mut controller, _notifier, log) = fake_controller();
        let mut form = FormState::default();

        controller.toggle().unwrap();
        controller.handle_event(RecognitionEvent::Started, &mut form);
        controller.handle_event(
            RecognitionEvent::Result {
                transcript: "first".into(),
            },
            &mut form,
        );

        controller.toggle().unwrap();
        assert_eq!(log.lock().unwrap().created, 2);
        // Prompt still holds the first transcript until a new result lands.
        assert_eq!(form.free_text_prompt, "first");
    }
}
