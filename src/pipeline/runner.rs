//! The [`RecordingPipeline`] — capture → persist → transcribe → analyze.

use std::sync::Arc;

use thiserror::Error;

use crate::analysis::{AnalysisError, AnalysisResult, ResponseAnalyzer};
use crate::audio::{self, CaptureError};
use crate::config::AudioConfig;
use crate::speech::{SpeechRecognizer, TranscribeError, Transcriber};

// ---------------------------------------------------------------------------
// CycleError
// ---------------------------------------------------------------------------

/// A recording cycle failed. Each variant names the stage that stopped it,
/// so the presentation layer can show a per-stage message while the session
/// stays usable.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("recording failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("could not save the recording: {0}")]
    Save(#[from] hound::Error),

    #[error("transcription failed: {0}")]
    Transcribe(#[from] TranscribeError),

    #[error("the recording produced no recognizable speech")]
    NoSpeech,

    #[error("analysis failed: {0}")]
    Analyze(#[from] AnalysisError),

    #[error("internal error: {0}")]
    Internal(String),
}

// ---------------------------------------------------------------------------
// CycleOutput
// ---------------------------------------------------------------------------

/// The result of one successful recording cycle.
#[derive(Debug, Clone)]
pub struct CycleOutput {
    /// What the speech service heard.
    pub transcript: String,
    /// How the language model scored it.
    pub analysis: AnalysisResult,
}

// ---------------------------------------------------------------------------
// RecordingPipeline
// ---------------------------------------------------------------------------

/// Owns the two external collaborators and the audio settings, and runs one
/// recording cycle at a time. Each cycle overwrites the previous recording
/// file — there is never more than one in flight.
pub struct RecordingPipeline {
    transcriber: Transcriber,
    analyzer: Arc<dyn ResponseAnalyzer>,
    audio: AudioConfig,
}

impl RecordingPipeline {
    pub fn new(
        recognizer: Arc<dyn SpeechRecognizer>,
        analyzer: Arc<dyn ResponseAnalyzer>,
        audio: AudioConfig,
    ) -> Self {
        Self {
            transcriber: Transcriber::new(recognizer),
            analyzer,
            audio,
        }
    }

    /// Run a full cycle: record from `device_index` for `duration_secs`,
    /// then hand the recording through transcription and analysis.
    ///
    /// The capture stage blocks for the entire duration; it runs on the
    /// blocking thread pool so the runtime is not stalled.
    pub async fn run_cycle(
        &self,
        device_index: usize,
        duration_secs: u32,
    ) -> Result<CycleOutput, CycleError> {
        let sample_rate = self.audio.sample_rate;

        let samples = tokio::task::spawn_blocking(move || {
            audio::record(device_index, duration_secs, sample_rate)
        })
        .await
        .map_err(|e| CycleError::Internal(e.to_string()))??;

        self.process_recording(&samples).await
    }

    /// The post-capture half of the cycle: persist `samples`, transcribe the
    /// file, score the transcript. Split out so tests can feed synthetic
    /// audio without a microphone.
    pub async fn process_recording(&self, samples: &[i16]) -> Result<CycleOutput, CycleError> {
        let path = &self.audio.recording_path;

        audio::save_wav(samples, self.audio.sample_rate, path)?;
        log::info!("saved recording to {}", path.display());

        let transcript = self.transcriber.transcribe(path).await?;
        if transcript.is_empty() {
            log::warn!("speech service returned no transcript");
            return Err(CycleError::NoSpeech);
        }
        log::info!("transcript: {transcript}");

        let analysis = self.analyzer.analyze(&transcript).await?;
        log::info!(
            "analysis complete: fluency {}, vocabulary {}, grammar {}, pronunciation {}",
            analysis.scores.fluency,
            analysis.scores.vocabulary,
            analysis.scores.grammar,
            analysis.scores.pronunciation
        );

        Ok(CycleOutput {
            transcript,
            analysis,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parse_analysis;
    use crate::speech::{RecognitionAlternative, RecognitionResult};
    use async_trait::async_trait;
    use tempfile::tempdir;

    struct FixedRecognizer {
        transcripts: Vec<&'static str>,
    }

    #[async_trait]
    impl SpeechRecognizer for FixedRecognizer {
        async fn recognize(
            &self,
            _pcm: &[u8],
            _sample_rate: u32,
        ) -> Result<Vec<RecognitionResult>, TranscribeError> {
            Ok(self
                .transcripts
                .iter()
                .map(|t| RecognitionResult {
                    alternatives: vec![RecognitionAlternative {
                        transcript: t.to_string(),
                        confidence: None,
                    }],
                })
                .collect())
        }
    }

    struct FixedAnalyzer {
        json: &'static str,
    }

    #[async_trait]
    impl ResponseAnalyzer for FixedAnalyzer {
        async fn analyze(&self, _transcript: &str) -> Result<AnalysisResult, AnalysisError> {
            parse_analysis(self.json)
        }
    }

    const ANALYSIS_JSON: &str = r#"{
        "scores": {"fluency": 7, "vocabulary": 6, "grammar": 8, "pronunciation": 7},
        "feedback": {"strengths": ["clear"], "improvements": ["pace"]}
    }"#;

    fn pipeline_in(dir: &std::path::Path, transcripts: Vec<&'static str>) -> RecordingPipeline {
        let audio = AudioConfig {
            recording_path: dir.join("cycle.wav"),
            ..AudioConfig::default()
        };
        RecordingPipeline::new(
            Arc::new(FixedRecognizer { transcripts }),
            Arc::new(FixedAnalyzer {
                json: ANALYSIS_JSON,
            }),
            audio,
        )
    }

    #[tokio::test]
    async fn process_recording_runs_all_stages() {
        let dir = tempdir().expect("temp dir");
        let pipeline = pipeline_in(dir.path(), vec!["test response"]);
        let samples = vec![0_i16; 44_100];

        let output = pipeline.process_recording(&samples).await.expect("cycle");

        assert_eq!(output.transcript, "test response");
        assert_eq!(output.analysis.scores.grammar, 8);
        assert!(dir.path().join("cycle.wav").is_file());
    }

    #[tokio::test]
    async fn empty_transcript_aborts_before_analysis() {
        let dir = tempdir().expect("temp dir");
        let pipeline = pipeline_in(dir.path(), vec![]);
        let samples = vec![0_i16; 44_100];

        let result = pipeline.process_recording(&samples).await;

        assert!(matches!(result, Err(CycleError::NoSpeech)));
    }

    #[tokio::test]
    async fn malformed_analysis_surfaces_as_analyze_error() {
        let dir = tempdir().expect("temp dir");
        let audio = AudioConfig {
            recording_path: dir.path().join("cycle.wav"),
            ..AudioConfig::default()
        };
        let pipeline = RecordingPipeline::new(
            Arc::new(FixedRecognizer {
                transcripts: vec!["something"],
            }),
            Arc::new(FixedAnalyzer {
                json: r#"{"feedback": {"strengths": [], "improvements": []}}"#,
            }),
            audio,
        );

        let result = pipeline.process_recording(&[0_i16; 44_100]).await;

        assert!(matches!(
            result,
            Err(CycleError::Analyze(AnalysisError::Parse(_)))
        ));
    }
}
