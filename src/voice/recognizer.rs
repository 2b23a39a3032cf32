//! Speech-recognition capability seam.
//!
//! The host platform may or may not offer speech recognition.  That
//! capability is modelled as two narrow traits:
//!
//! * [`SpeechBackend`] — the probe: asked for a session, it returns `None`
//!   when the capability is absent (never panics, never errors).
//! * [`RecognitionSession`] — one live recognition attempt with the
//!   `start`/`stop`/`abort` surface; it reports progress as
//!   [`RecognitionEvent`]s over the channel it was created with.
//!
//! The controller never touches a platform API directly, so any host —
//! including ones with no speech support at all — is represented honestly.

use thiserror::Error;

use crate::config::RecognitionConfig;

// ---------------------------------------------------------------------------
// VoiceError
// ---------------------------------------------------------------------------

/// Errors surfaced by the voice workflow.
///
/// Recoverable by design: the user can always type the question instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VoiceError {
    /// The host offers no speech-recognition capability.
    #[error("speech recognition is not supported on this host")]
    Unsupported,
}

// ---------------------------------------------------------------------------
// RecognitionEvent
// ---------------------------------------------------------------------------

/// Events emitted by a live [`RecognitionSession`].
///
/// `Result` carries only finalized transcripts — sessions are created with
/// interim results disabled, so partials never reach the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// The recognizer began listening.
    Started,
    /// A finalized utterance was recognized.  Terminal for the session.
    Result { transcript: String },
    /// Recognition failed.  Terminal for the session; nothing is retried.
    Error { message: String },
    /// The session ended without a result or error (e.g. silence timeout).
    Ended,
}

// ---------------------------------------------------------------------------
// RecognitionSession / SpeechBackend traits
// ---------------------------------------------------------------------------

/// One live speech-recognition attempt.
///
/// # Contract
///
/// - `start` begins listening; the session emits [`RecognitionEvent::Started`]
///   once the platform is actually capturing.
/// - `stop` finishes gracefully (a result may still arrive); `abort` discards
///   the attempt outright.
/// - After a terminal event (`Result`, `Error`, `Ended`) the session is dead;
///   a new toggle creates a fresh one.  No transcript is buffered across
///   sessions.
pub trait RecognitionSession: Send {
    fn start(&mut self);
    fn stop(&mut self);
    fn abort(&mut self);
}

/// Capability probe and session factory.
///
/// Implementations must be `Send + Sync`.  Returning `None` models an absent
/// platform capability — the caller surfaces [`VoiceError::Unsupported`] and
/// moves on.
pub trait SpeechBackend: Send + Sync {
    /// Create a session configured per `settings`, delivering its events on
    /// `events`.  `None` when the capability does not exist on this host.
    fn create(
        &self,
        settings: &RecognitionConfig,
        events: std::sync::mpsc::Sender<RecognitionEvent>,
    ) -> Option<Box<dyn RecognitionSession>>;
}

// Compile-time assertion: Box<dyn SpeechBackend> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechBackend>) {}
};

// ---------------------------------------------------------------------------
// UnsupportedBackend
// ---------------------------------------------------------------------------

/// The backend for hosts with no speech capability — every probe fails.
///
/// Wired by the terminal binary, where no speech API exists to adapt.
pub struct UnsupportedBackend;

impl SpeechBackend for UnsupportedBackend {
    fn create(
        &self,
        _settings: &RecognitionConfig,
        _events: std::sync::mpsc::Sender<RecognitionEvent>,
    ) -> Option<Box<dyn RecognitionSession>> {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
