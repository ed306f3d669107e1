//! Microphone capture via `cpal`.
//!
//! [`record`] opens the selected input device, captures mono samples at the
//! requested rate for a fixed duration, and returns them as 16-bit signed
//! PCM. The call blocks the current thread for the whole recording — there is
//! no cancellation mid-recording.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use thiserror::Error;

/// Shortest accepted recording, in seconds.
pub const MIN_DURATION_SECS: u32 = 10;
/// Longest accepted recording, in seconds.
pub const MAX_DURATION_SECS: u32 = 60;
/// Capture rate used when the caller does not override it (Hz).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Grace period past the nominal duration before the capture is declared
/// stalled (device stopped delivering buffers).
const STALL_GRACE: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// CaptureError
// ---------------------------------------------------------------------------

/// Errors that can occur while validating, opening, or running a capture.
///
/// `InvalidDuration` is raised before any device is touched. The cpal
/// variants cover the device-unavailable cases (bad index, busy, permission
/// denied — cpal folds these into its open/build errors); `Stalled` covers a
/// stream that stops delivering buffers mid-recording.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error(
        "recording duration must be between {MIN_DURATION_SECS} and \
         {MAX_DURATION_SECS} seconds (got {0})"
    )]
    InvalidDuration(u32),

    #[error("no input device with index {0}")]
    UnknownDevice(usize),

    #[error("failed to enumerate input devices: {0}")]
    Devices(#[from] cpal::DevicesError),

    #[error("failed to build input stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to start audio stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("audio stream stopped delivering samples mid-recording")]
    Stalled,
}

// ---------------------------------------------------------------------------
// Device enumeration
// ---------------------------------------------------------------------------

/// One available input device, addressable by its enumeration index.
#[derive(Debug, Clone)]
pub struct InputDevice {
    /// Position in the host's input-device enumeration; pass this to
    /// [`record`].
    pub index: usize,
    /// Human-readable device name.
    pub name: String,
    /// Whether this is the host's default input device.
    pub is_default: bool,
}

/// List the input devices on the default audio host, in enumeration order.
///
/// The indices are what [`record`] expects as `device_index`; re-enumerate
/// after plugging or unplugging hardware.
pub fn list_input_devices() -> Result<Vec<InputDevice>, CaptureError> {
    let host = cpal::default_host();
    let default_name = host
        .default_input_device()
        .and_then(|device| device.name().ok());

    let mut devices = Vec::new();
    for (index, device) in host.input_devices()?.enumerate() {
        let name = device
            .name()
            .unwrap_or_else(|_| format!("Input device {index}"));
        let is_default = default_name.as_deref() == Some(name.as_str());
        devices.push(InputDevice {
            index,
            name,
            is_default,
        });
    }

    Ok(devices)
}

// ---------------------------------------------------------------------------
// record
// ---------------------------------------------------------------------------

/// Record `duration_secs` seconds of mono 16-bit PCM at `sample_rate` from
/// the input device at `device_index`.
///
/// Blocks the calling thread for the full duration. The duration bounds are
/// checked first, so an out-of-range request never touches the device.
///
/// # Errors
///
/// * [`CaptureError::InvalidDuration`] — `duration_secs` outside
///   `[MIN_DURATION_SECS, MAX_DURATION_SECS]`.
/// * [`CaptureError::UnknownDevice`] / [`CaptureError::Devices`] — the index
///   does not name an available device.
/// * [`CaptureError::BuildStream`] / [`CaptureError::PlayStream`] — the
///   device refused a mono stream at the requested rate (busy, permission
///   denied, unsupported configuration).
/// * [`CaptureError::Stalled`] — the device stopped delivering buffers.
pub fn record(
    device_index: usize,
    duration_secs: u32,
    sample_rate: u32,
) -> Result<Vec<i16>, CaptureError> {
    if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&duration_secs) {
        return Err(CaptureError::InvalidDuration(duration_secs));
    }

    let host = cpal::default_host();
    let device = host
        .input_devices()?
        .nth(device_index)
        .ok_or(CaptureError::UnknownDevice(device_index))?;

    let config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(sample_rate),
        buffer_size: cpal::BufferSize::Default,
    };

    let target_samples = duration_secs as usize * sample_rate as usize;
    let (tx, rx) = mpsc::channel::<Vec<i16>>();

    let stream = device.build_input_stream(
        &config,
        move |data: &[f32], _: &cpal::InputCallbackInfo| {
            let chunk: Vec<i16> = data.iter().map(|&s| f32_to_i16(s)).collect();
            // Ignore send errors; the receiver is dropped once full.
            let _ = tx.send(chunk);
        },
        |err: cpal::StreamError| {
            log::error!("cpal stream error: {err}");
        },
        None, // no timeout
    )?;

    stream.play()?;
    log::info!("recording {duration_secs}s from device {device_index} at {sample_rate} Hz");

    let deadline = Instant::now() + Duration::from_secs(duration_secs as u64) + STALL_GRACE;
    let mut samples: Vec<i16> = Vec::with_capacity(target_samples);

    while samples.len() < target_samples {
        let remaining = deadline
            .checked_duration_since(Instant::now())
            .ok_or(CaptureError::Stalled)?;
        match rx.recv_timeout(remaining) {
            Ok(chunk) => samples.extend_from_slice(&chunk),
            Err(_) => return Err(CaptureError::Stalled),
        }
    }

    drop(stream);
    samples.truncate(target_samples);
    log::info!("recording complete ({} samples)", samples.len());

    Ok(samples)
}

/// Convert one `f32` sample in `[-1.0, 1.0]` to 16-bit signed PCM, clamping
/// out-of-range input.
pub fn f32_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- duration validation (must reject before device access) ---

    #[test]
    fn too_short_duration_is_rejected() {
        match record(0, MIN_DURATION_SECS - 1, DEFAULT_SAMPLE_RATE) {
            Err(CaptureError::InvalidDuration(9)) => {}
            other => panic!("expected InvalidDuration(9), got {other:?}"),
        }
    }

    #[test]
    fn too_long_duration_is_rejected() {
        match record(0, MAX_DURATION_SECS + 1, DEFAULT_SAMPLE_RATE) {
            Err(CaptureError::InvalidDuration(61)) => {}
            other => panic!("expected InvalidDuration(61), got {other:?}"),
        }
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert!(matches!(
            record(0, 0, DEFAULT_SAMPLE_RATE),
            Err(CaptureError::InvalidDuration(0))
        ));
    }

    // ---- sample conversion ---

    #[test]
    fn f32_to_i16_maps_full_scale() {
        assert_eq!(f32_to_i16(0.0), 0);
        assert_eq!(f32_to_i16(1.0), i16::MAX);
        assert_eq!(f32_to_i16(-1.0), -i16::MAX);
    }

    #[test]
    fn f32_to_i16_clamps_out_of_range() {
        assert_eq!(f32_to_i16(2.5), i16::MAX);
        assert_eq!(f32_to_i16(-2.5), -i16::MAX);
    }

    #[test]
    fn f32_to_i16_midpoint() {
        let half = f32_to_i16(0.5);
        assert!((half - i16::MAX / 2).abs() <= 1);
    }
}
