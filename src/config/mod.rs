//! Configuration module for CoDeb.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the generation
//! API and the speech-recognition session, `AppPaths` for cross-platform
//! config directories, and TOML persistence via `AppConfig::load` /
//! `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{ApiConfig, ApiKeySource, AppConfig, RecognitionConfig};
