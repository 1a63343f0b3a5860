use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{AnalyticalReview, DomainError, PromptMode, ReviewResult, VerbatimReview};

const REASONING_START_TAG: &str = "<think>";
const REASONING_END_TAG: &str = "</think>";

/// Locate the JSON object inside a raw completion.
///
/// Reasoning models prefix their answer with a `<think>` block, and some wrap
/// the object in a markdown fence. A leading reasoning block and anything
/// outside the outermost `{...}` are ignored.
fn extract_json_object(raw: &str) -> Option<&str> {
    let trimmed = raw.trim_start();
    let text = match trimmed.strip_prefix(REASONING_START_TAG) {
        Some(rest) => {
            let idx = rest.find(REASONING_END_TAG)?;
            &rest[idx + REASONING_END_TAG.len()..]
        }
        None => trimmed,
    };

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn decode<T: DeserializeOwned>(value: Value, shape: &str) -> Result<T, DomainError> {
    serde_json::from_value(value)
        .map_err(|e| DomainError::schema_mismatch(format!("response is not a valid {shape} result: {e}")))
}

/// Parse a raw completion into the result shape expected for `mode`.
///
/// Syntax errors yield `MalformedResponse`; valid JSON with missing, mistyped
/// or out-of-range fields yields `SchemaMismatch`.
pub fn parse_review_result(raw: &str, mode: PromptMode) -> Result<ReviewResult, DomainError> {
    let json = extract_json_object(raw)
        .ok_or_else(|| DomainError::malformed_response("no JSON object found in completion"))?;

    let value: Value = serde_json::from_str(json)
        .map_err(|e| DomainError::malformed_response(format!("invalid JSON: {e}")))?;

    if !value.is_object() {
        return Err(DomainError::schema_mismatch("top-level JSON value is not an object"));
    }

    let result = match mode {
        PromptMode::Synthesis => {
            ReviewResult::Analytical(decode::<AnalyticalReview>(value, "synthesis")?)
        }
        PromptMode::Retrieval => {
            ReviewResult::Verbatim(decode::<VerbatimReview>(value, "retrieval")?)
        }
    };

    result.validate()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERBATIM: &str = r#"{"company_name":"Acme","good_reviews":["x","y"],"bad_reviews":[]}"#;

    #[test]
    fn test_parses_verbatim_shape() {
        let result = parse_review_result(VERBATIM, PromptMode::Retrieval).unwrap();
        let verbatim = result.as_verbatim().unwrap();

        assert_eq!(verbatim.company_name, "Acme");
        assert_eq!(verbatim.good_reviews, vec!["x", "y"]);
        assert!(verbatim.bad_reviews.is_empty());
    }

    #[test]
    fn test_tolerates_reasoning_and_fences() {
        let raw = format!(
            "<think>The user wants {{reviews}}.</think>\n```json\n{VERBATIM}\n```"
        );
        let result = parse_review_result(&raw, PromptMode::Retrieval).unwrap();
        assert_eq!(result.as_verbatim().unwrap().good_reviews.len(), 2);
    }

    #[test]
    fn test_end_tag_inside_a_quote_is_kept() {
        let raw = r#"{"company_name":"Acme","good_reviews":["they let me </think> freely"],"bad_reviews":[]}"#;
        let result = parse_review_result(raw, PromptMode::Retrieval).unwrap();
        assert_eq!(
            result.as_verbatim().unwrap().good_reviews,
            vec!["they let me </think> freely"]
        );

        let raw = format!("<think>plan</think>{raw}");
        assert!(parse_review_result(&raw, PromptMode::Retrieval).is_ok());
    }

    #[test]
    fn test_unterminated_reasoning_is_malformed() {
        let err = parse_review_result("<think>still going {\"a\": 1}", PromptMode::Retrieval)
            .unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_review_result("{\"company_name\": \"Acme\",", PromptMode::Retrieval)
            .unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));

        let err = parse_review_result("no braces here", PromptMode::Retrieval).unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_field_is_schema_mismatch() {
        let err = parse_review_result(r#"{"company_name":"Acme","good_reviews":[]}"#, PromptMode::Retrieval)
            .unwrap_err();
        assert!(matches!(err, DomainError::SchemaMismatch(_)));
    }

    #[test]
    fn test_null_list_entry_is_schema_mismatch() {
        let err = parse_review_result(
            r#"{"company_name":"Acme","good_reviews":["ok", null],"bad_reviews":[]}"#,
            PromptMode::Retrieval,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::SchemaMismatch(_)));
    }

    #[test]
    fn test_accepts_fractional_notation_review_count() {
        let raw = serde_json::json!({
            "summary": { "overallRating": 4.1, "totalReviews": 1248.0, "recommendation": "Solid" },
            "platformRatings": { "glassdoor": 4.0, "indeed": 4.2, "ambitionBox": 3.9, "googleMaps": 4.4 },
            "reviewAnalysis": { "positiveThemes": ["pay"], "negativeThemes": ["hours"] },
            "detailedAssessment": {
                "workLifeBalance": { "rating": 3.8, "comments": "fine" },
                "careerGrowth": { "rating": 4.0, "comments": "fine" },
                "management": { "rating": 3.5, "comments": "fine" },
                "companyCulture": { "rating": 4.2, "comments": "fine" },
                "salaryBenefits": { "rating": 4.1, "comments": "fine" }
            },
            "sampleReviews": { "positive": ["good"], "negative": ["bad"] }
        })
        .to_string();

        let result = parse_review_result(&raw, PromptMode::Synthesis).unwrap();
        assert_eq!(result.as_analytical().unwrap().summary.total_reviews, 1248.0);
    }

    #[test]
    fn test_wrong_shape_for_mode_is_schema_mismatch() {
        let err = parse_review_result(VERBATIM, PromptMode::Synthesis).unwrap_err();
        assert!(matches!(err, DomainError::SchemaMismatch(_)));
    }
}
