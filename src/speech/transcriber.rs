//! WAV precondition checks and transcript assembly.
//!
//! [`Transcriber`] is the piece the pipeline calls: it validates the recorded
//! file, hands the raw PCM to a [`SpeechRecognizer`], and joins the top
//! alternative of each recognition result into a single transcript.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use hound::{SampleFormat, WavReader};
use thiserror::Error;

/// Sample rates the recognition service accepts for LINEAR16 audio (Hz).
pub const SUPPORTED_SAMPLE_RATES: [u32; 3] = [8_000, 16_000, 44_100];

// ---------------------------------------------------------------------------
// TranscribeError
// ---------------------------------------------------------------------------

/// Errors that can occur while validating the audio file or talking to the
/// recognition service. Each format violation gets its own variant so the
/// message can name the exact constraint.
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("audio file not found: {0}")]
    NotFound(PathBuf),

    #[error("audio file must be mono (got {0} channels)")]
    NotMono(u16),

    #[error("audio file must use 16-bit samples (got {0} bits)")]
    NotSixteenBit(u16),

    #[error("unsupported sample rate: {0} Hz (expected 8000, 16000 or 44100)")]
    UnsupportedRate(u32),

    #[error("failed to read WAV file: {0}")]
    Wav(#[from] hound::Error),

    #[error("speech service request failed: {0}")]
    Service(String),

    #[error("speech service request timed out")]
    Timeout,

    #[error("failed to parse speech service response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for TranscribeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranscribeError::Timeout
        } else {
            TranscribeError::Service(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Recognition result types
// ---------------------------------------------------------------------------

/// One candidate transcript for a stretch of audio.
#[derive(Debug, Clone)]
pub struct RecognitionAlternative {
    /// Transcribed text.
    pub transcript: String,
    /// Service-reported confidence in `[0, 1]`, when available.
    pub confidence: Option<f32>,
}

/// One recognition result; alternatives are ordered best-first, and only the
/// top one contributes to the final transcript.
#[derive(Debug, Clone)]
pub struct RecognitionResult {
    pub alternatives: Vec<RecognitionAlternative>,
}

// ---------------------------------------------------------------------------
// SpeechRecognizer trait
// ---------------------------------------------------------------------------

/// Async trait over the external speech-recognition collaborator.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn SpeechRecognizer>`.
///
/// # Arguments
/// * `pcm`         – raw little-endian LINEAR16 sample bytes.
/// * `sample_rate` – rate of the samples in Hz (already validated).
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(
        &self,
        pcm: &[u8],
        sample_rate: u32,
    ) -> Result<Vec<RecognitionResult>, TranscribeError>;
}

// ---------------------------------------------------------------------------
// Transcriber
// ---------------------------------------------------------------------------

/// Validates a recorded WAV file and turns it into a transcript.
///
/// # Validation order
///
/// 1. file exists
/// 2. WAV header readable
/// 3. exactly one channel
/// 4. 16-bit integer samples
/// 5. sample rate in [`SUPPORTED_SAMPLE_RATES`]
///
/// Only after all five pass is the recognizer invoked.
pub struct Transcriber {
    recognizer: Arc<dyn SpeechRecognizer>,
}

impl Transcriber {
    pub fn new(recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Transcribe the WAV file at `path`.
    ///
    /// Returns the top alternative of each recognition result, in result
    /// order, joined by single spaces and trimmed. An utterance the service
    /// could not recognise at all yields an empty string.
    ///
    /// # Errors
    ///
    /// Any precondition violation or service fault; see [`TranscribeError`].
    pub async fn transcribe(&self, path: &Path) -> Result<String, TranscribeError> {
        let (samples, sample_rate) = read_validated(path)?;

        let mut pcm = Vec::with_capacity(samples.len() * 2);
        for sample in samples {
            pcm.extend_from_slice(&sample.to_le_bytes());
        }

        let results = self.recognizer.recognize(&pcm, sample_rate).await?;
        Ok(join_transcripts(&results))
    }
}

/// Read `path`, enforcing the service's format preconditions, and return the
/// samples plus their validated rate.
fn read_validated(path: &Path) -> Result<(Vec<i16>, u32), TranscribeError> {
    if !path.is_file() {
        return Err(TranscribeError::NotFound(path.to_path_buf()));
    }

    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(TranscribeError::NotMono(spec.channels));
    }
    if spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        return Err(TranscribeError::NotSixteenBit(spec.bits_per_sample));
    }
    if !SUPPORTED_SAMPLE_RATES.contains(&spec.sample_rate) {
        return Err(TranscribeError::UnsupportedRate(spec.sample_rate));
    }

    let samples: Vec<i16> = reader.into_samples::<i16>().collect::<Result<_, _>>()?;
    Ok((samples, spec.sample_rate))
}

/// Join the top alternative of each result with single spaces, trimmed.
/// Order-preserving; results with no alternatives are skipped.
fn join_transcripts(results: &[RecognitionResult]) -> String {
    results
        .iter()
        .filter_map(|result| result.alternatives.first())
        .map(|alt| alt.transcript.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
