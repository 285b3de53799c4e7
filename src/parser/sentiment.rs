pub const OVERALL_SENTIMENT_MARKER: &str = "Overall Sentiment:";

/// Find the overall sentiment label in an analysis reply
///
/// The first line containing the marker wins; anything after the marker on
/// that line is returned trimmed.
pub fn extract_overall_sentiment(text: &str) -> Option<String> {
    text.lines().find_map(|line| {
        line.find(OVERALL_SENTIMENT_MARKER)
            .map(|idx| line[idx + OVERALL_SENTIMENT_MARKER.len()..].trim().to_string())
    })
}
