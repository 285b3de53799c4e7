use crate::parser::AnalysisOutcome;
use crate::source::Review;

/// Print fetched reviews before they are analyzed
pub fn print_reviews(reviews: &[Review]) {
    for (i, review) in reviews.iter().enumerate() {
        println!("### Review {}", i + 1);
        println!("Reviewer: {}", review.reviewer.as_deref().unwrap_or("Anonymous"));
        println!("Rating:   {}", review.rating.as_deref().unwrap_or("No rating"));
        println!("Comment:  {}", review.comment.as_deref().unwrap_or("No comment"));
        println!("---");
    }
}

/// Print the analysis outcome for a human reader
pub fn print_analysis(outcome: &AnalysisOutcome) {
    match outcome {
        AnalysisOutcome::Failed { error } => {
            println!("\n=== Sentiment Analysis Failed ===\n");
            println!("{}", error);
        }
        AnalysisOutcome::Parsed {
            raw_analysis,
            structured,
        } => {
            println!("\n=== Sentiment Analysis Results ===\n");
            println!(
                "Overall sentiment: {}",
                structured.overall_sentiment().unwrap_or("unknown")
            );
            println!("Negative reviews:  {}", structured.negative_count());

            for review in structured.negative_reviews() {
                println!("\n  - {}: {}", review.username, review.review_text);
                println!("    Issue: {}", review.issue_summary);
            }

            println!("\n--- Raw analysis ---\n");
            println!("{}", raw_analysis.trim_end());
        }
    }
    println!();
}
