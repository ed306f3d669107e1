//! Speech-to-text client — WAV validation + external recognition service.
//!
//! This module provides:
//! * [`SpeechRecognizer`] — async trait over the recognition collaborator,
//!   so tests can substitute mocks.
//! * [`GoogleSpeechClient`] — REST implementation (`speech:recognize`,
//!   LINEAR16, automatic punctuation).
//! * [`Transcriber`] — validates an on-disk WAV against the service's hard
//!   preconditions (mono, 16-bit, supported rate) before any network call,
//!   then assembles the transcript from the returned results.
//! * [`TranscribeError`] — one variant per distinct failure.
//!
//! Validation short-circuits: an invalid file never reaches the recognizer.

pub mod client;
pub mod transcriber;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::GoogleSpeechClient;
pub use transcriber::{
    RecognitionAlternative, RecognitionResult, SpeechRecognizer, TranscribeError, Transcriber,
    SUPPORTED_SAMPLE_RATES,
};
