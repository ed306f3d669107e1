//! WAV persistence via `hound`.
//!
//! One fixed output file per session, overwritten on every recording cycle —
//! at most one recording is in flight at a time, so there is no collision
//! handling or versioning.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Default on-disk recording file, overwritten each cycle.
pub const RECORDING_FILE: &str = "temp_recording.wav";

/// Write `samples` to `path` as a mono 16-bit WAV at `sample_rate`.
///
/// Any existing file at `path` is replaced unconditionally.
pub fn save_wav(samples: &[i16], sample_rate: u32, path: &Path) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    log::debug!(
        "wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
