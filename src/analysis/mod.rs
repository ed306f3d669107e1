//! Response analysis — transcript → IELTS band scores and feedback.
//!
//! This module provides:
//! * [`ResponseAnalyzer`] — async trait over the language-model collaborator.
//! * [`ApiAnalyzer`] — OpenAI-compatible `/v1/chat/completions` backend.
//! * [`AnalysisResult`] / [`Scores`] / [`Feedback`] — the strict result
//!   schema (four 0–9 sub-scores, two string lists).
//! * [`build_prompt`] — the fixed scoring prompt with the transcript
//!   embedded verbatim.
//! * [`AnalysisError`] — error variants; any completion that is not valid
//!   JSON in exactly the expected shape is a `Parse` error, never a panic.

pub mod analyzer;
pub mod prompt;
pub mod result;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use analyzer::{AnalysisError, ApiAnalyzer, ResponseAnalyzer};
pub use prompt::build_prompt;
pub use result::{parse_analysis, AnalysisResult, Feedback, Scores, MAX_SCORE};
