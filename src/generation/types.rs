// Generation endpoint response types.
// Deserializes the JSON reply and folds it into a submission result.

use serde::Deserialize;

use crate::state::SubmissionResult;

/// Message used when the backend fails without saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to generate review";

/// Raw JSON reply. Every field is optional so any shape deserializes and
/// validation happens in one place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationResponse {
    pub success: Option<bool>,
    pub ai_review: Option<String>,
    pub google_url: Option<String>,
    pub generation_method: Option<String>,
    pub error: Option<String>,
}

impl GenerationResponse {
    /// Interpret the reply. Anything but a complete success is a failure.
    pub fn into_result(self) -> SubmissionResult {
        match self {
            GenerationResponse {
                success: Some(true),
                ai_review: Some(review_text),
                google_url: Some(review_target_url),
                generation_method,
                ..
            } => SubmissionResult::Success {
                review_text,
                review_target_url,
                generation_method: generation_method
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "unknown".to_string()),
            },
            GenerationResponse {
                success: Some(true),
                ..
            } => SubmissionResult::failure("Malformed response from generation endpoint"),
            GenerationResponse { error, .. } => SubmissionResult::failure(
                error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SubmissionResult {
        serde_json::from_str::<GenerationResponse>(json)
            .unwrap()
            .into_result()
    }

    #[test]
    fn test_success() {
        let result = parse(
            r#"{"success": true, "ai_review": "Great service!", "google_url": "https://example/review", "generation_method": "template"}"#,
        );
        assert_eq!(
            result,
            SubmissionResult::Success {
                review_text: "Great service!".to_string(),
                review_target_url: "https://example/review".to_string(),
                generation_method: "template".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_method_is_unknown() {
        let result = parse(r#"{"success": true, "ai_review": "Ok", "google_url": "u"}"#);
        assert!(matches!(
            result,
            SubmissionResult::Success { ref generation_method, .. } if generation_method == "unknown"
        ));
    }

    #[test]
    fn test_application_failure_keeps_message() {
        let result = parse(r#"{"success": false, "error": "quota exceeded"}"#);
        assert_eq!(result, SubmissionResult::failure("quota exceeded"));
    }

    #[test]
    fn test_failure_without_message() {
        assert_eq!(
            parse(r#"{"success": false}"#),
            SubmissionResult::failure(DEFAULT_FAILURE_MESSAGE)
        );
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        assert_eq!(
            parse(r#"{"ai_review": "text", "google_url": "u"}"#),
            SubmissionResult::failure(DEFAULT_FAILURE_MESSAGE)
        );
    }

    #[test]
    fn test_success_without_review_is_malformed() {
        assert!(!parse(r#"{"success": true, "google_url": "u"}"#).is_success());
    }

    #[test]
    fn test_unexpected_types_fail_to_parse() {
        assert!(serde_json::from_str::<GenerationResponse>(r#"{"success": "yes"}"#).is_err());
    }
}
