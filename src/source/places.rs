use super::{check_status, Place, Review};
use crate::error::SourceError;
use serde::Deserialize;

const FIELD_MASK: &str = "id,displayName,formattedAddress,rating,reviews";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceResponse {
    #[serde(default)]
    display_name: Option<LocalizedText>,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    reviews: Vec<PlaceReview>,
}

#[derive(Debug, Deserialize)]
struct LocalizedText {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceReview {
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    text: Option<LocalizedText>,
    #[serde(default, alias = "author")]
    author_attribution: Option<Author>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Author {
    #[serde(default)]
    display_name: Option<String>,
}

impl From<PlaceReview> for Review {
    fn from(review: PlaceReview) -> Self {
        Review {
            reviewer: review.author_attribution.and_then(|a| a.display_name),
            rating: review.rating.map(|r| format!("{}/5", r)),
            comment: review.text.and_then(|t| t.text),
        }
    }
}

impl From<PlaceResponse> for Place {
    fn from(place: PlaceResponse) -> Self {
        Place {
            name: place.display_name.and_then(|n| n.text),
            address: place.formatted_address,
            rating: place.rating,
            reviews: place.reviews.into_iter().map(Review::from).collect(),
        }
    }
}

/// Fetch place details and reviews from the Places API
pub async fn fetch_place(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    place_id: &str,
) -> Result<Place, SourceError> {
    let url = format!("{}/places/{}", base_url.trim_end_matches('/'), place_id);

    let response = client
        .get(&url)
        .header("X-Goog-Api-Key", api_key)
        .header("X-Goog-FieldMask", FIELD_MASK)
        .send()
        .await?;

    let place: PlaceResponse = check_status(response).await?.json().await?;
    let place = Place::from(place);

    tracing::debug!(
        "Places API returned {} reviews for {:?}",
        place.reviews.len(),
        place.name
    );

    Ok(place)
}
