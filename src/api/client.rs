//! Core `GenerationClient` trait and `GeminiClient` implementation.
//!
//! `GeminiClient` calls a Gemini-style `generateContent` endpoint.  All
//! connection details come from [`ApiConfig`]; nothing is hardcoded — the
//! API key in particular arrives per call, resolved by the submission
//! controller from whichever source the configuration names.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ApiConfig;

/// Literal substituted when a 2xx response lacks the expected nested text
/// field.  A malformed success body is shown to the user as this string,
/// never treated as an error.
pub const NO_RESPONSE_FALLBACK: &str = "No response received";

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors that can occur during a generation call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The endpoint answered with a non-2xx status.  The body is not
    /// inspected — any non-success status is failure.
    #[error("API request failed: {0}")]
    RequestFailed(u16),

    /// Transport failure, or the response body could not be read/parsed as
    /// JSON at all.
    #[error("network or parsing error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// GenerationClient trait
// ---------------------------------------------------------------------------

/// Async trait for text-generation backends.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn GenerationClient>`).
///
/// # Contract
///
/// - Exactly one outbound request per `generate` call; no retry, no caching.
/// - A 2xx response always yields `Ok(_)` — a missing text field falls back
///   to [`NO_RESPONSE_FALLBACK`] rather than failing.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send `instruction` as the sole payload content and return the
    /// generated text.
    async fn generate(&self, instruction: &str, api_key: &str) -> Result<String, ApiError>;
}

// Compile-time assertion: Box<dyn GenerationClient> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn GenerationClient>) {}
};

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

/// Calls `POST {base_url}/v1beta/models/{model}:generateContent?key={key}`
/// with the JSON body `{ "contents": [ { "parts": [ { "text": … } ] } ] }`.
pub struct GeminiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl GeminiClient {
    /// Build a `GeminiClient` from application config.
    ///
    /// When `config.timeout_secs` is `None` the client keeps reqwest's own
    /// defaults and the call waits indefinitely — matching the browser
    /// `fetch` behaviour this endpoint was originally consumed with.
    pub fn from_config(config: &ApiConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Full request URL (without the key query parameter).
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

/// Wire body for a `generateContent` request.
fn build_request_body(instruction: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [ { "parts": [ { "text": instruction } ] } ]
    })
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
fn extract_text(body: &serde_json::Value) -> Option<&str> {
    body["candidates"][0]["content"]["parts"][0]["text"].as_str()
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, instruction: &str, api_key: &str) -> Result<String, ApiError> {
        let body = build_request_body(instruction);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("generation request rejected: HTTP {}", status.as_u16());
            return Err(ApiError::RequestFailed(status.as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let text = extract_text(&json).unwrap_or(NO_RESPONSE_FALLBACK);
        Ok(text.to_string())
    }
}

// ---------------------------------------------------------------------------
// MockGenerationClient  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response and counts calls —
/// the zero-network-calls properties are asserted against the counter.
#[cfg(test)]
pub struct MockGenerationClient {
    response: Result<String, ApiError>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockGenerationClient {
    /// Create a mock that always returns `Ok(text)`.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: ApiError) -> Self {
        Self {
            response: Err(error),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, _instruction: &str, _api_key: &str) -> Result<String, ApiError> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
