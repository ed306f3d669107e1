//! Configuration for the IELTS speaking coach.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for each subsystem,
//! `AppPaths` for cross-platform data directories, TOML persistence via
//! `AppConfig::load` / `AppConfig::save`, and `Credentials` read from the
//! process environment at startup.

pub mod credentials;
pub mod paths;
pub mod settings;

pub use credentials::{Credentials, MissingCredential, ANALYSIS_KEY_VAR, SPEECH_KEY_VAR};
pub use paths::AppPaths;
pub use settings::{AnalysisConfig, AppConfig, AudioConfig, SpeechConfig};
