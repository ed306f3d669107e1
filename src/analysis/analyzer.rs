//! Core `ResponseAnalyzer` trait and `ApiAnalyzer` implementation.
//!
//! `ApiAnalyzer` calls any OpenAI-compatible `/v1/chat/completions` endpoint
//! with a single user message and parses the completion strictly as an
//! [`AnalysisResult`]. All connection details come from [`AnalysisConfig`].

use async_trait::async_trait;
use thiserror::Error;

use crate::config::AnalysisConfig;

use super::prompt::build_prompt;
use super::result::{parse_analysis, AnalysisResult};

// ---------------------------------------------------------------------------
// AnalysisError
// ---------------------------------------------------------------------------

/// Errors that can occur while scoring a transcript.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// HTTP transport or connection error, or a non-success status.
    #[error("analysis request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("analysis request timed out")]
    Timeout,

    /// The completion was not valid JSON in exactly the expected shape.
    #[error("failed to parse analysis: {0}")]
    Parse(String),

    /// The model returned a completion with no usable text content.
    #[error("analysis service returned an empty completion")]
    EmptyResponse,
}

impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AnalysisError::Timeout
        } else {
            AnalysisError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// ResponseAnalyzer trait
// ---------------------------------------------------------------------------

/// Async trait for the language-model scoring collaborator.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn ResponseAnalyzer>`.
#[async_trait]
pub trait ResponseAnalyzer: Send + Sync {
    async fn analyze(&self, transcript: &str) -> Result<AnalysisResult, AnalysisError>;
}

// ---------------------------------------------------------------------------
// ApiAnalyzer
// ---------------------------------------------------------------------------

/// Scores transcripts via an OpenAI-compatible chat-completions endpoint.
///
/// One request per transcript, bounded by the configured timeout, no retry.
pub struct ApiAnalyzer {
    client: reqwest::Client,
    config: AnalysisConfig,
    api_key: String,
}

impl ApiAnalyzer {
    /// Build an analyzer with the per-request timeout from `config`.
    pub fn from_config(config: &AnalysisConfig, api_key: String) -> Self {
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
impl ResponseAnalyzer for ApiAnalyzer {
    async fn analyze(&self, transcript: &str) -> Result<AnalysisResult, AnalysisError> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "user", "content": build_prompt(transcript) }
            ],
            "temperature": self.config.temperature,
        });

        let mut request = self.client.post(&url).json(&body);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Request(format!(
                "analysis API returned {status}: {detail}"
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(AnalysisError::EmptyResponse)?
            .trim();

        if content.is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }

        parse_analysis(content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_builds_without_panic() {
        let config = AnalysisConfig::default();
        let _analyzer = ApiAnalyzer::from_config(&config, "sk-test".into());
    }

    #[test]
    fn from_config_accepts_empty_api_key() {
        let config = AnalysisConfig::default();
        let _analyzer = ApiAnalyzer::from_config(&config, String::new());
    }

    /// `ApiAnalyzer` must be usable behind `dyn ResponseAnalyzer`.
    #[test]
    fn analyzer_is_object_safe() {
        let config = AnalysisConfig::default();
        let analyzer: Box<dyn ResponseAnalyzer> =
            Box::new(ApiAnalyzer::from_config(&config, String::new()));
        drop(analyzer);
    }
}
