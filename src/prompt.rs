use crate::source::{Place, Review};

/// Built-in analysis instructions; the reply format is what the parser expects
pub const DEFAULT_TEMPLATE: &str = "Analyze the sentiment of the following Google reviews.
Provide an overall sentiment score for all reviews combined (positive, neutral, or negative).
Then, identify any reviews with negative sentiment and list them with the following information:
1. Username of the reviewer
2. The full review text
3. A brief summary of the specific issues or complaints mentioned

Format your response as:
Overall Sentiment: [positive/neutral/negative]

Negative Reviews:
[Username]: [Review Text]
Issue Summary: [Brief summary of the problems mentioned]
";

/// Render reviews as numbered blocks separated by blank lines
pub fn format_reviews(reviews: &[Review]) -> String {
    reviews
        .iter()
        .enumerate()
        .map(|(i, review)| {
            format!(
                "Review #{}\nReviewer: {}\nRating: {}\nComment: {}\n",
                i + 1,
                review.reviewer.as_deref().unwrap_or("Anonymous"),
                review.rating.as_deref().unwrap_or("No rating"),
                review.comment.as_deref().unwrap_or("No comment"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Business details placed ahead of the reviews; empty when nothing is known
pub fn business_context(place: &Place) -> String {
    let Some(name) = place.name.as_deref() else {
        return String::new();
    };

    let mut context = format!("Business Name: {}\n", name);
    if let Some(ref address) = place.address {
        context.push_str(&format!("Address: {}\n", address));
    }
    if let Some(rating) = place.rating {
        context.push_str(&format!("Overall Rating: {}/5\n", rating));
    }
    context.push('\n');
    context
}

pub fn build_prompt(template: &str, place: &Place) -> String {
    format!(
        "{}\n\n{}{}",
        template.trim_end(),
        business_context(place),
        format_reviews(&place.reviews)
    )
}
