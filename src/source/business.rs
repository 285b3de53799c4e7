use super::{check_status, Review};
use crate::error::SourceError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    reviews: Vec<BusinessReview>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BusinessReview {
    #[serde(default)]
    reviewer: Option<Reviewer>,
    #[serde(default)]
    star_rating: Option<String>,
    #[serde(default)]
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Reviewer {
    #[serde(default)]
    display_name: Option<String>,
}

/// Map `ONE`..`FIVE` to `1/5`..`5/5`; unknown values pass through
fn star_rating(raw: &str) -> Option<String> {
    let stars = match raw {
        "ONE" => 1,
        "TWO" => 2,
        "THREE" => 3,
        "FOUR" => 4,
        "FIVE" => 5,
        "STAR_RATING_UNSPECIFIED" | "" => return None,
        other => return Some(other.to_string()),
    };
    Some(format!("{}/5", stars))
}

impl From<BusinessReview> for Review {
    fn from(review: BusinessReview) -> Self {
        Review {
            reviewer: review.reviewer.and_then(|r| r.display_name),
            rating: review.star_rating.as_deref().and_then(star_rating),
            comment: review.comment,
        }
    }
}

/// List reviews for a location through the My Business API
pub async fn fetch_reviews(
    client: &reqwest::Client,
    base_url: &str,
    access_token: &str,
    account_id: &str,
    location_id: &str,
    page_size: u32,
) -> Result<Vec<Review>, SourceError> {
    let url = format!(
        "{}/accounts/{}/locations/{}/reviews",
        base_url.trim_end_matches('/'),
        account_id,
        location_id
    );

    let response = client
        .get(&url)
        .bearer_auth(access_token)
        .query(&[("pageSize", page_size)])
        .send()
        .await?;

    let body: ReviewsResponse = check_status(response).await?.json().await?;
    tracing::debug!("Business API returned {} reviews", body.reviews.len());

    Ok(body.reviews.into_iter().map(Review::from).collect())
}
