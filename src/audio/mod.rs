//! Audio capture and persistence — microphone → mono i16 buffer → WAV file.
//!
//! # Pipeline
//!
//! ```text
//! Microphone → cpal callback → sample chunks (mpsc) → f32 → i16
//!           → fixed-duration Vec<i16> → save_wav (hound)
//! ```
//!
//! Capture is synchronous: [`record`] blocks the calling thread for the full
//! requested duration. Exactly one recording is in flight at a time and each
//! one overwrites the previous WAV file.

pub mod capture;
pub mod wav;

pub use capture::{
    f32_to_i16, list_input_devices, record, CaptureError, InputDevice, DEFAULT_SAMPLE_RATE,
    MAX_DURATION_SECS, MIN_DURATION_SECS,
};
pub use wav::{save_wav, RECORDING_FILE};
