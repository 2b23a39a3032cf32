//! Form state for the submission workflow.
//!
//! [`FormState`] is transient, in-memory and UI-scoped: the frontend mutates
//! its fields directly on user input, and nothing is validated until
//! `SubmissionController::submit` trims and checks the fields.

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// Everything the user can type (or speak) before pressing submit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Source code pasted into the code box.  May be empty.
    pub code_text: String,
    /// Selected programming-language tag (e.g. `"python"`).
    ///
    /// See [`crate::languages`] for the catalog of known tags.
    pub language: String,
    /// Free-text question — typed, or overwritten wholesale by a finalized
    /// voice transcript.
    pub free_text_prompt: String,
    /// API key entered by the user.  Only consulted when the configuration
    /// says the key is user-provided.
    pub api_key: Option<String>,
}

impl FormState {
    /// An empty form with the given default language tag.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            code_text: String::new(),
            language: language.into(),
            free_text_prompt: String::new(),
            api_key: None,
        }
    }

    /// `true` when both the code box and the question box are empty or
    /// whitespace-only — the `InputRequired` precondition.
    pub fn is_empty(&self) -> bool {
        self.code_text.trim().is_empty() && self.free_text_prompt.trim().is_empty()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(crate::languages::DEFAULT_LANGUAGE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
