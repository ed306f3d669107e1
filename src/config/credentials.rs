//! API credentials, read from the process environment at startup.
//!
//! Two services, two keys. The binary refuses to start when either is
//! missing — better to fail at launch than midway through a recording cycle.

use thiserror::Error;

/// Environment variable holding the speech-recognition API key.
pub const SPEECH_KEY_VAR: &str = "GOOGLE_SPEECH_API_KEY";
/// Environment variable holding the language-model API key.
pub const ANALYSIS_KEY_VAR: &str = "OPENAI_API_KEY";

/// A required credential is absent (unset or empty).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required environment variable {0}")]
pub struct MissingCredential(pub &'static str);

/// Both external-service API keys.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub speech_api_key: String,
    pub analysis_api_key: String,
}

impl Credentials {
    /// Read both keys from the process environment.
    ///
    /// An empty value counts as missing.
    pub fn from_env() -> Result<Self, MissingCredential> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MissingCredential> {
        let speech_api_key = lookup(SPEECH_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(MissingCredential(SPEECH_KEY_VAR))?;
        let analysis_api_key = lookup(ANALYSIS_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(MissingCredential(ANALYSIS_KEY_VAR))?;

        Ok(Self {
            speech_api_key,
            analysis_api_key,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |var| map.get(var).map(|v| v.to_string())
    }

    #[test]
    fn both_keys_present() {
        let map = HashMap::from([
            (SPEECH_KEY_VAR, "speech-key"),
            (ANALYSIS_KEY_VAR, "analysis-key"),
        ]);
        let creds = Credentials::from_lookup(lookup_from(&map)).expect("credentials");
        assert_eq!(creds.speech_api_key, "speech-key");
        assert_eq!(creds.analysis_api_key, "analysis-key");
    }

    #[test]
    fn missing_speech_key_is_reported_by_name() {
        let map = HashMap::from([(ANALYSIS_KEY_VAR, "analysis-key")]);
        let err = Credentials::from_lookup(lookup_from(&map)).unwrap_err();
        assert_eq!(err, MissingCredential(SPEECH_KEY_VAR));
    }

    #[test]
    fn missing_analysis_key_is_reported_by_name() {
        let map = HashMap::from([(SPEECH_KEY_VAR, "speech-key")]);
        let err = Credentials::from_lookup(lookup_from(&map)).unwrap_err();
        assert_eq!(err, MissingCredential(ANALYSIS_KEY_VAR));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let map = HashMap::from([(SPEECH_KEY_VAR, ""), (ANALYSIS_KEY_VAR, "analysis-key")]);
        let err = Credentials::from_lookup(lookup_from(&map)).unwrap_err();
        assert_eq!(err, MissingCredential(SPEECH_KEY_VAR));
    }
}
