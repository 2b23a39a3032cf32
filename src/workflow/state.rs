//! Submission result state machine and shared application state.
//!
//! [`SubmissionResult`] tracks one submission attempt.  The frontend reads it
//! via [`SharedState`] to render the result panel and to disable the submit
//! trigger while a call is in flight.
//!
//! [`SharedState`] is a type alias for `Arc<Mutex<AppState>>` — cheap to clone
//! and safe to share across tasks.

use std::sync::{Arc, Mutex};

use crate::workflow::submit::SubmitError;

// ---------------------------------------------------------------------------
// SubmissionResult
// ---------------------------------------------------------------------------

/// Outcome of the current submission attempt.
///
/// The state machine transitions are:
///
/// ```text
/// Idle ──submit──▶ Pending ──(ok)──▶ Success(text)
///                          ──(http error | network error)──▶ Failure(reason)
/// Success | Failure ──submit──▶ Pending     (re-entrant, no terminal state)
/// ```
///
/// A new attempt always resets to `Pending` first; results supersede each
/// other, they are never merged.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// No submission has been attempted yet (or the panel was cleared).
    Idle,

    /// A request is in flight; the submit trigger should be disabled.
    Pending,

    /// The endpoint answered and the text is ready to display.
    Success(String),

    /// The attempt failed.  Terminal for this attempt; the next submit
    /// starts fresh.
    Failure(SubmitError),
}

impl SubmissionResult {
    /// Returns `true` while a request is in flight.
    ///
    /// The frontend uses this to disable the submit trigger — the only
    /// guard against overlapping submissions.
    ///
    /// ```
    /// use codeb::workflow::SubmissionResult;
    ///
    /// assert!(!SubmissionResult::Idle.is_pending());
    /// assert!(SubmissionResult::Pending.is_pending());
    /// assert!(!SubmissionResult::Success("ok".into()).is_pending());
    /// ```
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionResult::Pending)
    }

    /// A short human-readable label suitable for a status line.
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionResult::Idle => "Idle",
            SubmissionResult::Pending => "Analyzing",
            SubmissionResult::Success(_) => "Done",
            SubmissionResult::Failure(_) => "Failed",
        }
    }
}

impl Default for SubmissionResult {
    fn default() -> Self {
        SubmissionResult::Idle
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Shared application state — what the frontend renders.
///
/// Held behind [`SharedState`].  The submission controller mutates `result`;
/// form fields are mutated by user input and by the voice controller.
#[derive(Debug, Default)]
pub struct AppState {
    /// Outcome of the current (or last) submission attempt.
    pub result: SubmissionResult,
}

// ---------------------------------------------------------------------------
// SharedState
// ---------------------------------------------------------------------------

/// Thread-safe handle to [`AppState`].
///
/// Cheap to clone (`Arc` clone).  Lock for a short critical section; do
/// **not** hold the lock across `.await` points.
pub type SharedState = Arc<Mutex<AppState>>;

/// Construct a new [`SharedState`] wrapping a default [`AppState`].
pub fn new_shared_state() -> SharedState {
    Arc::new(Mutex::new(AppState::default()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
