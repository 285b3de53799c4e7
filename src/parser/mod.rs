mod analysis;
mod negative;
mod sentiment;

pub use analysis::{AnalysisOutcome, NegativeReviewEntry, StructuredAnalysis};
pub use negative::extract_negative_reviews;
pub use sentiment::extract_overall_sentiment;

use crate::config::DanglingPolicy;
use crate::error::ParserError;

/// Structure an analysis reply into sentiment plus negative reviews
///
/// Never fails: text that does not follow the requested template simply
/// yields fewer fields.
pub fn structure(text: &str, policy: DanglingPolicy) -> StructuredAnalysis {
    let overall_sentiment = extract_overall_sentiment(text);
    let negative_reviews = extract_negative_reviews(text, policy);

    tracing::debug!(
        "Structured analysis: sentiment={:?}, {} negative reviews",
        overall_sentiment,
        negative_reviews.len()
    );

    StructuredAnalysis::new(overall_sentiment, negative_reviews)
}

/// Structure raw bytes, failing only when they are not UTF-8 text
///
/// Returns the validated text alongside the structured result.
pub fn structure_bytes(
    raw: &[u8],
    policy: DanglingPolicy,
) -> Result<(&str, StructuredAnalysis), ParserError> {
    let text = std::str::from_utf8(raw)?;
    Ok((text, structure(text, policy)))
}

/// Run the structuring step and wrap the result as an [`AnalysisOutcome`]
pub fn outcome_from_bytes(raw: &[u8], policy: DanglingPolicy) -> AnalysisOutcome {
    match structure_bytes(raw, policy) {
        Ok((text, structured)) => AnalysisOutcome::Parsed {
            raw_analysis: text.to_owned(),
            structured,
        },
        Err(e) => {
            tracing::warn!("Failed to structure analysis: {}", e);
            AnalysisOutcome::Failed {
                error: format!("Could not structure the analysis results: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"Overall Sentiment: negative

Negative Reviews:
Jane Doe: The food was cold and service was slow.
Issue Summary: Cold food, slow service.
John Smith: Rude staff.
Issue Summary: Staff behavior complaint.
"#;

    #[test]
    fn test_structure_sample_reply() {
        let analysis = structure(SAMPLE, DanglingPolicy::Drop);

        assert_eq!(analysis.overall_sentiment(), Some("negative"));
        assert_eq!(analysis.negative_count(), 2);
        assert_eq!(
            analysis.negative_reviews(),
            &[
                NegativeReviewEntry {
                    username: "Jane Doe".to_string(),
                    review_text: "The food was cold and service was slow.".to_string(),
                    issue_summary: "Cold food, slow service.".to_string(),
                },
                NegativeReviewEntry {
                    username: "John Smith".to_string(),
                    review_text: "Rude staff.".to_string(),
                    issue_summary: "Staff behavior complaint.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_structure_empty_input() {
        let analysis = structure("", DanglingPolicy::Drop);
        assert_eq!(analysis.overall_sentiment(), None);
        assert!(analysis.negative_reviews().is_empty());
        assert_eq!(analysis.negative_count(), 0);
    }

    #[test]
    fn test_structure_free_form_reply() {
        let text = "I'm sorry, I could not find any reviews to analyze.";
        let analysis = structure(text, DanglingPolicy::Keep);
        assert!(analysis.is_empty());
    }

    #[test]
    fn test_count_matches_len_for_odd_inputs() {
        let inputs = [
            "Negative Reviews:",
            "Negative Reviews:\nA: b\nC: d\nIssue Summary: e\nIssue Summary: f",
            "Negative Reviews:\n:\nIssue Summary:",
            "Overall Sentiment: positive\nNegative Reviews:\nNone.",
            "Negative Reviews:\nA: b\nNegative Reviews:\nIssue Summary: c",
        ];
        for input in inputs {
            for policy in [DanglingPolicy::Drop, DanglingPolicy::Keep] {
                let analysis = structure(input, policy);
                assert_eq!(analysis.negative_count(), analysis.negative_reviews().len());
            }
        }
    }

    #[test]
    fn test_structure_bytes_rejects_non_utf8() {
        let raw = [0x4f, 0x76, 0xff, 0xfe, 0x00];
        assert!(matches!(
            structure_bytes(&raw, DanglingPolicy::Drop),
            Err(ParserError::NotText(_))
        ));
    }

    #[test]
    fn test_structure_bytes_returns_validated_text() {
        let (text, structured) =
            structure_bytes(SAMPLE.as_bytes(), DanglingPolicy::Drop).unwrap();
        assert_eq!(text, SAMPLE);
        assert_eq!(text.as_ptr(), SAMPLE.as_ptr());
        assert_eq!(structured.negative_count(), 2);
    }

    #[test]
    fn test_outcome_distinguishes_failure_from_empty() {
        let empty = outcome_from_bytes(b"", DanglingPolicy::Drop);
        assert!(empty.is_success());
        assert!(empty.structured().unwrap().is_empty());

        let failed = outcome_from_bytes(&[0xc3, 0x28], DanglingPolicy::Drop);
        assert!(!failed.is_success());
        match failed {
            AnalysisOutcome::Failed { error } => {
                assert!(error.starts_with("Could not structure"))
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_outcome_keeps_raw_text() {
        let outcome = outcome_from_bytes(SAMPLE.as_bytes(), DanglingPolicy::Drop);
        match outcome {
            AnalysisOutcome::Parsed {
                raw_analysis,
                structured,
            } => {
                assert_eq!(raw_analysis, SAMPLE);
                assert_eq!(structured.negative_count(), 2);
            }
            other => panic!("expected parsed outcome, got {:?}", other),
        }
    }
}
