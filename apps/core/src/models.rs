//! Request and response types for the analysis service.
//!
//! Response fields are consumed as-is for rendering; the client performs no
//! range validation on scores. Nested indicator maps are free-form on the
//! service side, so they are kept as raw JSON values and accessed
//! defensively.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Outbound body for `POST /analyze-similarity`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SimilarityRequest {
    #[validate(length(min = 1, message = "first text is required for similarity analysis"))]
    pub text1: String,
    #[validate(length(min = 1, message = "second text is required for similarity analysis"))]
    pub text2: String,
}

/// Outbound body for `POST /detect-ai` when submitting raw text.
#[derive(Debug, Clone, Serialize)]
pub struct AiDetectionRequest {
    pub text: String,
}

/// Scores returned by `/analyze-similarity`.
///
/// All four fields are 0.0–1.0 fractions. This differs from `/detect-ai`,
/// which reports 0–100 scores; the mismatch is a property of the service
/// and is preserved here, with the x100 conversion applied only at display
/// time via [`fraction_as_percent`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarityScores {
    #[serde(default)]
    pub cosine_similarity: f64,
    #[serde(default)]
    pub jaccard_similarity: f64,
    #[serde(default)]
    pub tfidf_similarity: f64,
    #[serde(default)]
    pub average_similarity: f64,
}

/// Verdict returned by `/detect-ai`.
///
/// Percentage fields are already on a 0–100 scale. Everything past the
/// headline numbers is optional: older service versions omit `details`
/// and `analysis` entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiDetectionResult {
    #[serde(default)]
    pub ai_probability: f64,
    #[serde(default)]
    pub is_ai_generated: bool,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<DetectionDetails>,
    #[serde(default)]
    pub analysis: Option<DetectionAnalysis>,
}

/// Per-heuristic sub-scores, 0–100 each.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionDetails {
    #[serde(default)]
    pub pattern_score: f64,
    #[serde(default)]
    pub structure_score: f64,
    #[serde(default)]
    pub style_score: f64,
}

/// Indicator breakdown attached to a detection verdict.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionAnalysis {
    #[serde(default)]
    pub text_statistics: Map<String, Value>,
    #[serde(default)]
    pub ai_indicators: Map<String, Value>,
    #[serde(default)]
    pub human_indicators: Map<String, Value>,
    #[serde(default)]
    pub key_findings: Vec<String>,
}

/// Prior report summaries from `GET /reports`, passed through opaquely.
pub type ReportList = Vec<Value>;

/// Structured error payload the service attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceErrorBody {
    /// The service's own wording when present, untranslated.
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message).filter(|m| !m.trim().is_empty())
    }
}

/// Format a 0.0–1.0 fraction as a two-decimal percentage: 0.8534 -> "85.34%".
pub fn fraction_as_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format an already 0–100 scaled score with one decimal: 85.3 -> "85.3%".
pub fn score_as_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_to_percent_display() {
        assert_eq!(fraction_as_percent(0.8534), "85.34%");
        assert_eq!(fraction_as_percent(1.0), "100.00%");
        assert_eq!(fraction_as_percent(0.0), "0.00%");
    }

    #[test]
    fn test_score_percent_display() {
        assert_eq!(score_as_percent(85.34), "85.3%");
        assert_eq!(score_as_percent(0.0), "0.0%");
    }

    #[test]
    fn test_detection_result_tolerates_minimal_payload() {
        // Older service versions return only the headline fields.
        let json = r#"{"ai_probability": 72.5, "message": "likely AI"}"#;
        let result: AiDetectionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ai_probability, 72.5);
        assert!(!result.is_ai_generated);
        assert!(result.details.is_none());
        assert!(result.analysis.is_none());
    }

    #[test]
    fn test_error_body_prefers_error_field() {
        let body: ServiceErrorBody =
            serde_json::from_str(r#"{"error": "bad input", "message": "ignored"}"#).unwrap();
        assert_eq!(body.into_message().unwrap(), "bad input");

        let body: ServiceErrorBody = serde_json::from_str(r#"{"message": "fallback"}"#).unwrap();
        assert_eq!(body.into_message().unwrap(), "fallback");

        let body: ServiceErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.into_message().is_none());
    }

    #[test]
    fn test_similarity_request_validation() {
        let request = SimilarityRequest {
            text1: "some text".to_string(),
            text2: String::new(),
        };
        assert!(request.validate().is_err());

        let request = SimilarityRequest {
            text1: "some text".to_string(),
            text2: "other text".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
