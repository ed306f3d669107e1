//! IELTS speaking-practice tool.
//!
//! Presents prompts for the three parts of the speaking test, records a
//! spoken answer, transcribes it via an external speech-recognition API, and
//! scores the transcript via an external language model.
//!
//! # Modules
//!
//! * [`session`] — mode/part state machine and the static question bank.
//! * [`audio`] — fixed-duration microphone capture and WAV persistence.
//! * [`speech`] — WAV validation and the speech-recognition client.
//! * [`analysis`] — scoring prompt, strict result schema, LLM client.
//! * [`pipeline`] — drives one capture → transcribe → analyze cycle.
//! * [`config`] — TOML settings and environment credentials.

pub mod analysis;
pub mod audio;
pub mod config;
pub mod pipeline;
pub mod session;
pub mod speech;
