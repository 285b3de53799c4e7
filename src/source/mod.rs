mod business;
mod places;

use crate::config::GoogleConfig;
use crate::error::SourceError;
use crate::location::LocationTarget;
use serde::Serialize;
use std::time::Duration;

pub const PLACES_API_KEY_ENV: &str = "GOOGLE_PLACES_API_KEY";
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";

/// A review normalised from either Google API
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Review {
    pub reviewer: Option<String>,
    /// Rendered as `N/5`
    pub rating: Option<String>,
    pub comment: Option<String>,
}

/// A location and the reviews fetched for it
#[derive(Debug, Clone, Default)]
pub struct Place {
    pub name: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Vec<Review>,
}

/// Credentials for the Google APIs, usually taken from the environment
#[derive(Debug, Clone, Default)]
pub struct GoogleCredentials {
    pub places_api_key: Option<String>,
    /// Already-issued OAuth bearer token for the My Business API
    pub access_token: Option<String>,
}

pub struct GoogleClient {
    client: reqwest::Client,
    config: GoogleConfig,
    credentials: GoogleCredentials,
}

impl GoogleClient {
    pub fn new(config: GoogleConfig, credentials: GoogleCredentials) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    #[cfg(test)]
    fn with_client(
        client: reqwest::Client,
        config: GoogleConfig,
        credentials: GoogleCredentials,
    ) -> Self {
        Self {
            client,
            config,
            credentials,
        }
    }

    /// Fetch reviews for a resolved location
    pub async fn fetch(&self, target: &LocationTarget) -> Result<Place, SourceError> {
        tracing::info!("Fetching reviews for {}", target);

        match target {
            LocationTarget::Place { place_id } => {
                let key = self
                    .credentials
                    .places_api_key
                    .as_deref()
                    .ok_or(SourceError::MissingCredential(PLACES_API_KEY_ENV))?;
                places::fetch_place(&self.client, &self.config.places_base_url, key, place_id).await
            }
            LocationTarget::Business {
                account_id,
                location_id,
            } => {
                let token = self
                    .credentials
                    .access_token
                    .as_deref()
                    .ok_or(SourceError::MissingCredential(ACCESS_TOKEN_ENV))?;
                let reviews = business::fetch_reviews(
                    &self.client,
                    &self.config.business_base_url,
                    token,
                    account_id,
                    location_id,
                    self.config.page_size,
                )
                .await?;
                Ok(Place {
                    reviews,
                    ..Place::default()
                })
            }
        }
    }
}

/// Turn a non-2xx response into [`SourceError::Api`]
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(SourceError::Api { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{local_client, serve_once};

    fn client_for(base_url: &str) -> GoogleClient {
        let config = GoogleConfig {
            places_base_url: format!("{}/v1", base_url),
            business_base_url: format!("{}/v4", base_url),
            page_size: 25,
        };
        let credentials = GoogleCredentials {
            places_api_key: Some("places-key".to_string()),
            access_token: Some("token-123".to_string()),
        };
        GoogleClient::with_client(local_client(), config, credentials)
    }

    fn place(id: &str) -> LocationTarget {
        LocationTarget::Place {
            place_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_places_request_sends_key_and_field_mask() {
        let (base_url, server) = serve_once(
            200,
            r#"{"displayName": {"text": "Joe's Diner"}, "reviews": [{"rating": 2, "text": {"text": "Slow"}, "authorAttribution": {"displayName": "Ann"}}]}"#,
        )
        .await;

        let place = client_for(&base_url).fetch(&place("ChIJ1")).await.unwrap();
        let request = server.await.unwrap().to_lowercase();

        assert!(request.starts_with("get /v1/places/chij1 http/1.1"));
        assert!(request.contains("x-goog-api-key: places-key"));
        assert!(request
            .contains("x-goog-fieldmask: id,displayname,formattedaddress,rating,reviews"));
        assert_eq!(place.name.as_deref(), Some("Joe's Diner"));
        assert_eq!(place.reviews.len(), 1);
        assert_eq!(place.reviews[0].reviewer.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_business_request_sends_page_size_and_token() {
        let (base_url, server) = serve_once(
            200,
            r#"{"reviews": [{"reviewer": {"displayName": "Bo"}, "starRating": "ONE", "comment": "Dirty"}]}"#,
        )
        .await;

        let target = LocationTarget::Business {
            account_id: "acc".to_string(),
            location_id: "loc".to_string(),
        };
        let place = client_for(&base_url).fetch(&target).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /v4/accounts/acc/locations/loc/reviews?pageSize=25 "));
        assert!(request.to_lowercase().contains("authorization: bearer token-123"));
        assert_eq!(place.name, None);
        assert_eq!(place.reviews[0].rating.as_deref(), Some("1/5"));
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let (base_url, server) =
            serve_once(403, r#"{"error": {"message": "API key not valid"}}"#).await;

        let err = client_for(&base_url).fetch(&place("X")).await.unwrap_err();
        server.await.unwrap();

        match err {
            SourceError::Api { status, body } => {
                assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
                assert!(body.contains("API key not valid"));
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let client = GoogleClient::with_client(
            local_client(),
            GoogleConfig::default(),
            GoogleCredentials::default(),
        );

        let err = client.fetch(&place("X")).await.unwrap_err();
        assert!(matches!(err, SourceError::MissingCredential(PLACES_API_KEY_ENV)));

        let target = LocationTarget::Business {
            account_id: "a".to_string(),
            location_id: "l".to_string(),
        };
        let err = client.fetch(&target).await.unwrap_err();
        assert!(matches!(err, SourceError::MissingCredential(ACCESS_TOKEN_ENV)));
    }
}
