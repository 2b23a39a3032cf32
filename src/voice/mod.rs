//! Voice capture workflow for CoDeb.
//!
//! Bridges an optional platform speech-recognition capability to the
//! free-text prompt field:
//!
//! ```text
//! VoiceController::toggle()
//!   ├─ no capability → UnsupportedCapability notification, nothing changes
//!   ├─ active        → RecognitionSession::stop, mark inactive
//!   └─ inactive      → SpeechBackend::create (single-utterance,
//!                      final-results-only, configured locale) → start
//!
//! RecognitionEvent (mpsc)
//!   ├─ Started            → active, "Listening..." notification
//!   ├─ Result{transcript} → overwrite prompt field, inactive, "Voice Captured"
//!   ├─ Error{..}          → inactive, failure notification, no retry
//!   └─ Ended              → inactive if not already handled
//! ```
//!
//! The platform capability is consumed only through the narrow
//! [`SpeechBackend`] / [`RecognitionSession`] seam, so the controller is
//! platform-agnostic and fully testable with a fake backend.

pub mod controller;
pub mod recognizer;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use controller::VoiceController;
pub use recognizer::{
    RecognitionEvent, RecognitionSession, SpeechBackend, UnsupportedBackend, VoiceError,
};
