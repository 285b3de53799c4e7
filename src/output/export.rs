use crate::error::OutputError;
use crate::parser::StructuredAnalysis;
use std::path::Path;

const HEADER: [&str; 5] = [
    "Username",
    "Review",
    "Issue Summary",
    "Business Name",
    "Overall Sentiment",
];

/// `negative_reviews_<business>.csv` with spaces replaced by underscores
pub fn csv_file_name(business: &str) -> String {
    format!("negative_reviews_{}.csv", business.replace(' ', "_"))
}

/// Write negative reviews as CSV, one row per review
///
/// Nothing is written when there are no negative reviews; returns whether
/// a file was created.
pub fn write_csv(
    path: &Path,
    analysis: &StructuredAnalysis,
    business: &str,
) -> Result<bool, OutputError> {
    if analysis.negative_reviews().is_empty() {
        tracing::info!("No negative reviews to export");
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(OutputError::CreateDir)?;
    }

    let sentiment = analysis.overall_sentiment().unwrap_or("");
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    for review in analysis.negative_reviews() {
        writer.write_record([
            review.username.as_str(),
            review.review_text.as_str(),
            review.issue_summary.as_str(),
            business,
            sentiment,
        ])?;
    }

    writer.flush().map_err(OutputError::WriteCsv)?;
    tracing::info!(
        "Wrote {} negative reviews to {:?}",
        analysis.negative_count(),
        path
    );
    Ok(true)
}
