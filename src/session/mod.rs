//! Session state machine and IELTS prompt bank.
//!
//! This module provides:
//! * [`Session`] — mode + part navigation state for one practice run.
//! * [`Mode`] — Unset / Practice / Test, selected once per process.
//! * [`Response`] — transcript + analysis recorded for a completed part.
//! * [`PartPrompts`] / [`prompts_for`] — the static question bank.
//!
//! The state machine is deliberately tiny:
//!
//! ```text
//! Unset ──select_mode──▶ Practice | Test   (first selection wins)
//! Test:  part 1 ◀─retreat─ part N ─advance─▶ part 3   (clamped)
//! reset: part = 1, responses cleared, mode KEPT
//! ```

pub mod prompts;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use prompts::{part_title, prompts_for, PartPrompts};
pub use state::{Mode, Response, Session, PART_MAX, PART_MIN};
