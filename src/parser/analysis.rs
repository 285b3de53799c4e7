use serde::Serialize;

/// A review the model flagged as negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NegativeReviewEntry {
    pub username: String,
    pub review_text: String,
    pub issue_summary: String,
}

/// Structured view of one analysis reply
///
/// Fields are read-only so `negative_count` can never drift from the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredAnalysis {
    overall_sentiment: Option<String>,
    negative_reviews: Vec<NegativeReviewEntry>,
    negative_count: usize,
}

impl StructuredAnalysis {
    pub fn new(
        overall_sentiment: Option<String>,
        negative_reviews: Vec<NegativeReviewEntry>,
    ) -> Self {
        let negative_count = negative_reviews.len();
        Self {
            overall_sentiment,
            negative_reviews,
            negative_count,
        }
    }

    pub fn overall_sentiment(&self) -> Option<&str> {
        self.overall_sentiment.as_deref()
    }

    pub fn negative_reviews(&self) -> &[NegativeReviewEntry] {
        &self.negative_reviews
    }

    pub fn negative_count(&self) -> usize {
        self.negative_count
    }

    pub fn is_empty(&self) -> bool {
        self.overall_sentiment.is_none() && self.negative_reviews.is_empty()
    }
}

/// Result of running an analysis through the structuring step
///
/// `Failed` means structuring could not run at all, which is different from
/// a `Parsed` result that happens to be empty.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Parsed {
        raw_analysis: String,
        structured: StructuredAnalysis,
    },
    Failed {
        error: String,
    },
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Parsed { .. })
    }

    pub fn structured(&self) -> Option<&StructuredAnalysis> {
        match self {
            AnalysisOutcome::Parsed { structured, .. } => Some(structured),
            AnalysisOutcome::Failed { .. } => None,
        }
    }
}
