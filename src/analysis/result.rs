//! The strict [`AnalysisResult`] schema and its validator.
//!
//! The language model is asked for this exact JSON shape. Nothing it returns
//! is trusted: [`parse_analysis`] rejects unknown fields, missing fields, and
//! out-of-range scores, so a malformed completion always surfaces as
//! [`super::AnalysisError::Parse`] rather than propagating garbage.

use serde::{Deserialize, Serialize};

use super::analyzer::AnalysisError;

/// IELTS band ceiling — every sub-score is an integer in `[0, MAX_SCORE]`.
pub const MAX_SCORE: u8 = 9;

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Four 0–9 sub-scores, one per assessed criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scores {
    pub fluency: u8,
    pub vocabulary: u8,
    pub grammar: u8,
    pub pronunciation: u8,
}

/// Free-text feedback lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// The complete scoring result for one spoken response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisResult {
    pub scores: Scores,
    pub feedback: Feedback,
}

impl Scores {
    fn all_in_range(&self) -> bool {
        [self.fluency, self.vocabulary, self.grammar, self.pronunciation]
            .iter()
            .all(|&score| score <= MAX_SCORE)
    }
}

// ---------------------------------------------------------------------------
// parse_analysis
// ---------------------------------------------------------------------------

/// Parse a completion's text strictly as an [`AnalysisResult`].
///
/// # Errors
///
/// [`AnalysisError::Parse`] when the text is not valid JSON, does not match
/// the schema exactly, or contains a sub-score above [`MAX_SCORE`].
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let result: AnalysisResult =
        serde_json::from_str(text).map_err(|e| AnalysisError::Parse(e.to_string()))?;

    if !result.scores.all_in_range() {
        return Err(AnalysisError::Parse(format!(
            "score out of range 0-{MAX_SCORE}: {:?}",
            result.scores
        )));
    }

    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "scores": {"fluency": 7, "vocabulary": 6, "grammar": 8, "pronunciation": 7},
        "feedback": {"strengths": ["clear"], "improvements": ["pace"]}
    }"#;

    #[test]
    fn valid_completion_parses_exactly() {
        let result = parse_analysis(VALID).expect("parse");

        assert_eq!(result.scores.fluency, 7);
        assert_eq!(result.scores.vocabulary, 6);
        assert_eq!(result.scores.grammar, 8);
        assert_eq!(result.scores.pronunciation, 7);
        assert_eq!(result.feedback.strengths, vec!["clear".to_string()]);
        assert_eq!(result.feedback.improvements, vec!["pace".to_string()]);
    }

    #[test]
    fn missing_scores_key_is_a_parse_error() {
        let raw = r#"{"feedback": {"strengths": [], "improvements": []}}"#;
        assert!(matches!(
            parse_analysis(raw),
            Err(AnalysisError::Parse(_))
        ));
    }

    #[test]
    fn missing_sub_score_is_a_parse_error() {
        let raw = r#"{
            "scores": {"fluency": 7, "vocabulary": 6, "grammar": 8},
            "feedback": {"strengths": [], "improvements": []}
        }"#;
        assert!(matches!(parse_analysis(raw), Err(AnalysisError::Parse(_))));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let raw = r#"{
            "scores": {"fluency": 7, "vocabulary": 6, "grammar": 8, "pronunciation": 7},
            "feedback": {"strengths": [], "improvements": []},
            "overall": 7
        }"#;
        assert!(matches!(parse_analysis(raw), Err(AnalysisError::Parse(_))));
    }

    #[test]
    fn score_above_nine_is_a_parse_error() {
        let raw = r#"{
            "scores": {"fluency": 10, "vocabulary": 6, "grammar": 8, "pronunciation": 7},
            "feedback": {"strengths": [], "improvements": []}
        }"#;
        assert!(matches!(parse_analysis(raw), Err(AnalysisError::Parse(_))));
    }

    #[test]
    fn non_json_is_a_parse_error() {
        assert!(matches!(
            parse_analysis("I'd rate this a solid 7 out of 9."),
            Err(AnalysisError::Parse(_))
        ));
    }

    #[test]
    fn schema_round_trips_through_json() {
        let original = parse_analysis(VALID).expect("parse");
        let encoded = serde_json::to_string(&original).expect("encode");
        let decoded = parse_analysis(&encoded).expect("re-parse");
        assert_eq!(original, decoded);
    }
}
