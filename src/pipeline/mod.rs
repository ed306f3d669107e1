//! Recording-cycle orchestrator.
//!
//! One call to [`RecordingPipeline::run_cycle`] drives a full cycle:
//!
//! ```text
//! record (blocks for the duration, on spawn_blocking)
//!   └─▶ save_wav (fixed path, overwrite)
//!         └─▶ Transcriber::transcribe (validate, then speech API)
//!               └─▶ ResponseAnalyzer::analyze (scoring API)
//!                     └─▶ CycleOutput { transcript, analysis }
//! ```
//!
//! Stages run strictly in sequence; the first failure aborts the cycle with
//! a [`CycleError`] naming the stage. Nothing is retried — the session stays
//! usable and the user simply records again.

pub mod runner;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{CycleError, CycleOutput, RecordingPipeline};
