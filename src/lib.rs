//! CoDeb — AI code-debugging assistant core.
//!
//! The crate implements the two interaction workflows behind the CoDeb demo
//! application:
//!
//! * **Submission workflow** — collect code text, a language tag and/or a
//!   free-text question, build a single instruction payload, POST it to a
//!   generative-language endpoint and map the outcome to a displayable
//!   [`workflow::SubmissionResult`].
//! * **Voice capture workflow** — wrap an optional platform speech-recognition
//!   capability behind a start/stop toggle; a finalized transcript overwrites
//!   the free-text prompt field.
//!
//! # Architecture
//!
//! ```text
//! FormState ──submit()──▶ SubmissionController
//!                              │  InstructionBuilder (debug / general template)
//!                              │  GenerationClient::generate (reqwest, one POST)
//!                              ▼
//!                         SharedState (SubmissionResult) + Notifier
//!
//! SpeechBackend::create ──▶ RecognitionSession ──events──▶ VoiceController
//!                                                  └─ overwrites FormState.free_text_prompt
//! ```
//!
//! Both external seams are object-safe traits ([`api::GenerationClient`],
//! [`voice::SpeechBackend`]) so the controllers can be exercised with test
//! doubles and wired to real transports in `main`.

pub mod api;
pub mod app;
pub mod config;
pub mod form;
pub mod languages;
pub mod notify;
pub mod prompt;
pub mod voice;
pub mod workflow;
