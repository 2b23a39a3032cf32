//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// ApiKeySource
// ---------------------------------------------------------------------------

/// Selects where the generation-API key comes from.
///
/// | Variant      | Key read from                        |
/// |--------------|--------------------------------------|
/// | Embedded     | `ApiConfig::api_key` (settings file) |
/// | UserProvided | `FormState::api_key` (entered live)  |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ApiKeySource {
    /// Key is pre-configured in the settings file (demo deployments).
    Embedded,
    /// Key is typed into the form by the user at runtime.
    UserProvided,
}

impl Default for ApiKeySource {
    fn default() -> Self {
        Self::Embedded
    }
}

// ---------------------------------------------------------------------------
// ApiConfig
// ---------------------------------------------------------------------------

/// Settings for the generative-language HTTP endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Where the API key is sourced from at submit time.
    pub key_source: ApiKeySource,
    /// API key used when `key_source` is [`ApiKeySource::Embedded`].
    ///
    /// Injected via configuration rather than baked into the binary.
    pub api_key: Option<String>,
    /// Base URL of the generation API.
    pub base_url: String,
    /// Model identifier embedded in the request path
    /// (e.g. `"gemini-2.0-flash"`).
    pub model: String,
    /// Per-request timeout in seconds.  `None` (the default) leaves the
    /// transport's own defaults in effect — the call waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key_source: ApiKeySource::default(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".into(),
            model: "gemini-2.0-flash".into(),
            timeout_secs: None,
        }
    }
}

// ---------------------------------------------------------------------------
// RecognitionConfig
// ---------------------------------------------------------------------------

/// Settings passed to the speech-recognition capability when a voice session
/// is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// BCP-47 locale tag for the recognizer.
    pub locale: String,
    /// Keep recognizing after the first utterance.  The voice workflow wants
    /// exactly one utterance per toggle, so this stays `false`.
    pub continuous: bool,
    /// Deliver interim (non-final) partial results.  The prompt field is only
    /// written from finalized transcripts, so this stays `false`.
    pub interim_results: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            continuous: false,
            interim_results: false,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use codeb::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generation-API settings.
    pub api: ApiConfig,
    /// Speech-recognition session settings.
    pub recognition: RecognitionConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.api.key_source, loaded.api.key_source);
        assert_eq!(original.api.api_key, loaded.api.api_key);
        assert_eq!(original.api.base_url, loaded.api.base_url);
        assert_eq!(original.api.model, loaded.api.model);
        assert_eq!(original.api.timeout_secs, loaded.api.timeout_secs);

        assert_eq!(original.recognition.locale, loaded.recognition.locale);
        assert_eq!(
            original.recognition.continuous,
            loaded.recognition.continuous
        );
        assert_eq!(
            original.recognition.interim_results,
            loaded.recognition.interim_results
        );
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        let default = AppConfig::default();

        assert_eq!(config.api.key_source, default.api.key_source);
        assert_eq!(config.api.base_url, default.api.base_url);
        assert_eq!(config.recognition.locale, default.recognition.locale);
    }

    /// Verify the session defaults: single-utterance, final-results-only,
    /// fixed en-US locale, no configured timeout.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.api.key_source, ApiKeySource::Embedded);
        assert!(cfg.api.api_key.is_none());
        assert_eq!(
            cfg.api.base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(cfg.api.model, "gemini-2.0-flash");
        assert!(cfg.api.timeout_secs.is_none());

        assert_eq!(cfg.recognition.locale, "en-US");
        assert!(!cfg.recognition.continuous);
        assert!(!cfg.recognition.interim_results);
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.api.key_source = ApiKeySource::UserProvided;
        cfg.api.api_key = Some("demo-key-123".into());
        cfg.api.base_url = "https://example.invalid".into();
        cfg.api.model = "gemini-1.5-pro".into();
        cfg.api.timeout_secs = Some(30);
        cfg.recognition.locale = "en-GB".into();

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.api.key_source, ApiKeySource::UserProvided);
        assert_eq!(loaded.api.api_key, Some("demo-key-123".into()));
        assert_eq!(loaded.api.base_url, "https://example.invalid");
        assert_eq!(loaded.api.model, "gemini-1.5-pro");
        assert_eq!(loaded.api.timeout_secs, Some(30));
        assert_eq!(loaded.recognition.locale, "en-GB");
    }
}
