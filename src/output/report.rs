use crate::error::OutputError;
use crate::parser::AnalysisOutcome;
use crate::source::Review;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything recorded about one analysis run
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub timestamp: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<String>,
    pub reviews: Vec<Review>,
    pub outcome: AnalysisOutcome,
}

/// Write `analysis.json` and `analysis.md` into `report_dir`
pub fn write_report(report_dir: &Path, report: &AnalysisReport) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let json_path = report_dir.join("analysis.json");
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&json_path, json).map_err(OutputError::WriteReport)?;

    let md_path = report_dir.join("analysis.md");
    fs::write(&md_path, build_markdown(report)).map_err(OutputError::WriteReport)?;

    tracing::info!("Report written to {:?}", report_dir);
    Ok(md_path)
}

fn build_markdown(report: &AnalysisReport) -> String {
    let mut content = String::new();

    content.push_str(&format!(
        "# Review Sentiment: {}\n\n",
        report.business.as_deref().unwrap_or(&report.target)
    ));

    content.push_str("| Metric | Value |\n");
    content.push_str("|--------|-------|\n");
    content.push_str(&format!("| Generated | {} |\n", report.timestamp));
    content.push_str(&format!("| Location | {} |\n", report.target));
    content.push_str(&format!("| Reviews | {} |\n", report.reviews.len()));

    match &report.outcome {
        AnalysisOutcome::Failed { error } => {
            content.push_str("| Status | failed |\n\n---\n\n");
            content.push_str(&format!("**Error:** {}\n", error));
        }
        AnalysisOutcome::Parsed {
            raw_analysis,
            structured,
        } => {
            content.push_str(&format!(
                "| Overall Sentiment | {} |\n",
                structured.overall_sentiment().unwrap_or("unknown")
            ));
            content.push_str(&format!(
                "| Negative Reviews | {} |\n",
                structured.negative_count()
            ));
            content.push_str("\n---\n\n");

            if structured.negative_reviews().is_empty() {
                content.push_str("*No negative reviews*\n");
            } else {
                content.push_str("## Negative Reviews\n\n");
                for review in structured.negative_reviews() {
                    content.push_str(&format!("### {}\n\n", review.username));
                    content.push_str(&format!("> {}\n\n", review.review_text));
                    content.push_str(&format!("**Issue Summary:** {}\n\n", review.issue_summary));
                }
            }

            content.push_str("\n## Raw Analysis\n\n```\n");
            content.push_str(raw_analysis.trim_end());
            content.push_str("\n```\n");
        }
    }

    content
}
