//! Submission controller — validates the form, builds the instruction
//! payload, performs the generation call and maps the outcome to a
//! displayable result plus a notification.
//!
//! Exactly one network call is made per [`SubmissionController::submit`]
//! invocation.  Nothing is retried, cached or deduplicated, and an in-flight
//! call is never cancelled by a later one — the frontend's only guard is
//! [`SubmissionResult::is_pending`].

use std::sync::Arc;

use thiserror::Error;

use crate::api::{ApiError, GenerationClient};
use crate::config::{ApiConfig, ApiKeySource};
use crate::form::FormState;
use crate::notify::{Notification, Notifier};
use crate::prompt::{Instruction, InstructionBuilder};
use crate::workflow::state::{SharedState, SubmissionResult};

// ---------------------------------------------------------------------------
// SubmitError
// ---------------------------------------------------------------------------

/// Why a submission attempt failed.
///
/// The precondition variants (`InputRequired`, `ApiKeyRequired`) are raised
/// before any network traffic; the `Api` variant wraps the HTTP outcome.
/// All are terminal for the attempt — the user edits the form and tries
/// again.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    /// Both the code box and the question box were empty or whitespace-only.
    #[error("Please provide either code to debug or ask a question.")]
    InputRequired,

    /// The configured key source yielded no usable API key.
    #[error("Please enter your API key before submitting.")]
    ApiKeyRequired,

    /// The generation call itself failed (non-2xx status or transport error).
    #[error(transparent)]
    Api(#[from] ApiError),
}

// ---------------------------------------------------------------------------
// SubmissionController
// ---------------------------------------------------------------------------

/// Drives the submission workflow.
///
/// The controller owns the [`SharedState`] result slot and emits a
/// [`Notification`] for every outcome; no failure escapes past it.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use codeb::api::{GeminiClient, GenerationClient};
/// use codeb::config::ApiConfig;
/// use codeb::form::FormState;
/// use codeb::notify::{ChannelNotifier, Notifier};
/// use codeb::workflow::{new_shared_state, SubmissionController};
///
/// # async fn example() {
/// let config = ApiConfig::default();
/// let client: Arc<dyn GenerationClient> = Arc::new(GeminiClient::from_config(&config));
/// let (tx, _rx) = std::sync::mpsc::channel();
/// let notifier: Arc<dyn Notifier> = Arc::new(ChannelNotifier::new(tx));
///
/// let controller =
///     SubmissionController::new(client, config, new_shared_state(), notifier);
///
/// let mut form = FormState::default();
/// form.free_text_prompt = "what is ownership?".into();
/// let _ = controller.submit(&form).await;
/// # }
/// ```
pub struct SubmissionController {
    client: Arc<dyn GenerationClient>,
    config: ApiConfig,
    state: SharedState,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionController {
    /// Create a new controller.
    ///
    /// # Arguments
    ///
    /// * `client`   — generation backend (e.g. [`GeminiClient`]).
    /// * `config`   — API settings, including the key source.
    /// * `state`    — shared result slot the frontend renders.
    /// * `notifier` — toast sink.
    ///
    /// [`GeminiClient`]: crate::api::GeminiClient
    pub fn new(
        client: Arc<dyn GenerationClient>,
        config: ApiConfig,
        state: SharedState,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            config,
            state,
            notifier,
        }
    }

    // -----------------------------------------------------------------------
    // submit
    // -----------------------------------------------------------------------

    /// Run one submission attempt.
    ///
    /// Precondition failures leave the result state untouched (the previous
    /// result stays on screen) and emit a blocking notification.  Once
    /// validation passes the result transitions to `Pending`, exactly one
    /// generation call is made, and the outcome lands in the shared state.
    pub async fn submit(&self, form: &FormState) -> Result<String, SubmitError> {
        // ── 1. Preconditions (no network traffic) ────────────────────────
        let Some(instruction) = InstructionBuilder::build(form) else {
            self.notifier.notify(Notification::error(
                "Input Required",
                "Please provide either code to debug or ask a question.",
            ));
            return Err(SubmitError::InputRequired);
        };

        let Some(api_key) = self.resolve_api_key(form) else {
            self.notifier.notify(Notification::error(
                "API Key Required",
                "Please enter your API key before submitting.",
            ));
            return Err(SubmitError::ApiKeyRequired);
        };

        // ── 2. Pending ───────────────────────────────────────────────────
        {
            let mut st = self.state.lock().unwrap();
            st.result = SubmissionResult::Pending;
        }

        match &instruction {
            Instruction::Debug(_) => log::debug!("submit: debug template selected"),
            Instruction::General(_) => log::debug!("submit: general template selected"),
        }

        // ── 3. One generation call ───────────────────────────────────────
        match self.client.generate(instruction.text(), &api_key).await {
            Ok(text) => {
                {
                    let mut st = self.state.lock().unwrap();
                    st.result = SubmissionResult::Success(text.clone());
                }
                self.notifier.notify(Notification::success(
                    "Analysis Complete",
                    "CoDeb has analyzed your code and provided suggestions!",
                ));
                Ok(text)
            }
            Err(e) => {
                log::warn!("submit: generation call failed: {e}");
                let err = SubmitError::from(e);
                {
                    let mut st = self.state.lock().unwrap();
                    st.result = SubmissionResult::Failure(err.clone());
                }
                self.notifier.notify(Notification::error(
                    "Analysis Failed",
                    "Failed to analyze code. Please try again.",
                ));
                Err(err)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Resolve the API key from the configured source.
    ///
    /// Returns `None` when the source yields an empty/whitespace key — the
    /// `ApiKeyRequired` precondition.
    fn resolve_api_key(&self, form: &FormState) -> Option<String> {
        let key = match self.config.key_source {
            ApiKeySource::Embedded => self.config.api_key.as_deref(),
            ApiKeySource::UserProvided => form.api_key.as_deref(),
        };
        key.map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
