//! Generation-API module for CoDeb.
//!
//! This module provides:
//! * [`GenerationClient`] — async trait implemented by all generation backends.
//! * [`GeminiClient`] — reqwest client for a Gemini-style `generateContent`
//!   endpoint.
//! * [`ApiError`] — error variants for generation calls.

pub mod client;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{ApiError, GeminiClient, GenerationClient, NO_RESPONSE_FALLBACK};

#[cfg(test)]
pub use client::MockGenerationClient;
