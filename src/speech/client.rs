//! REST client for the Google Cloud Speech-to-Text `speech:recognize` call.
//!
//! Audio goes up as base64 LINEAR16 content with the validated sample rate;
//! the language and punctuation flag come from [`SpeechConfig`]. One request
//! per recording, no retry — a fault surfaces as a [`TranscribeError`] and
//! the cycle is aborted.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::config::SpeechConfig;

use super::transcriber::{
    RecognitionAlternative, RecognitionResult, SpeechRecognizer, TranscribeError,
};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<WireResult>,
}

#[derive(Debug, Deserialize)]
struct WireResult {
    #[serde(default)]
    alternatives: Vec<WireAlternative>,
}

#[derive(Debug, Deserialize)]
struct WireAlternative {
    #[serde(default)]
    transcript: String,
    confidence: Option<f32>,
}

// ---------------------------------------------------------------------------
// GoogleSpeechClient
// ---------------------------------------------------------------------------

/// Speech-recognition collaborator backed by the Google Cloud Speech REST
/// API.
///
/// The endpoint base URL, language and punctuation flag come from
/// [`SpeechConfig`]; the API key is passed separately because credentials
/// live in the process environment, not the settings file.
pub struct GoogleSpeechClient {
    client: reqwest::Client,
    config: SpeechConfig,
    api_key: String,
}

impl GoogleSpeechClient {
    /// Build a client with the per-request timeout from `config`.
    pub fn from_config(config: &SpeechConfig, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
            api_key,
        }
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechClient {
    /// Submit `pcm` (raw little-endian LINEAR16 bytes) for recognition.
    ///
    /// The sample rate must already be validated by the caller; the service
    /// rejects rates it was not told about.
    async fn recognize(
        &self,
        pcm: &[u8],
        sample_rate: u32,
    ) -> Result<Vec<RecognitionResult>, TranscribeError> {
        let url = format!(
            "{}/v1/speech:recognize?key={}",
            self.config.endpoint, self.api_key
        );

        let body = serde_json::json!({
            "config": {
                "encoding": "LINEAR16",
                "sampleRateHertz": sample_rate,
                "languageCode": self.config.language,
                "enableAutomaticPunctuation": self.config.punctuation,
            },
            "audio": {
                "content": STANDARD.encode(pcm),
            }
        });

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TranscribeError::Service(format!(
                "speech API returned {status}: {detail}"
            )));
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| TranscribeError::Parse(e.to_string()))?;

        Ok(parsed
            .results
            .into_iter()
            .map(|result| RecognitionResult {
                alternatives: result
                    .alternatives
                    .into_iter()
                    .map(|alt| RecognitionAlternative {
                        transcript: alt.transcript,
                        confidence: alt.confidence,
                    })
                    .collect(),
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
