//! Submission workflow for CoDeb.
//!
//! This module wires the form → instruction → generation-API → result flow
//! and exposes the shared state a frontend reads to render the result panel.
//!
//! # Flow
//!
//! ```text
//! submit(form)
//!   ├─ both fields empty        → Err(InputRequired), notification, no call,
//!   │                             result state untouched
//!   ├─ resolved API key empty   → Err(ApiKeyRequired), likewise
//!   └─ otherwise
//!        ├─ result = Pending
//!        ├─ InstructionBuilder::build(form)       (debug or general template)
//!        ├─ GenerationClient::generate            (exactly one POST)
//!        ├─ Ok(text)  → Success(text)  + success notification
//!        └─ Err(e)    → Failure(e)     + blocking notification
//! ```
//!
//! Every failure is converted to a notification plus a result-state update;
//! nothing propagates past the controller boundary.

pub mod state;
pub mod submit;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use state::{new_shared_state, AppState, SharedState, SubmissionResult};
pub use submit::{SubmissionController, SubmitError};
