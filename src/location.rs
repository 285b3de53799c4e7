//! Resolve which Google location to fetch reviews for.

use crate::error::LocationError;
use regex::Regex;
use reqwest::Url;

/// URL shapes that carry a place identifier, tried in order
const PLACE_ID_PATTERNS: &[&str] = &[
    // https://www.google.com/maps/place/<name>/<id>
    r"place/[^/]+/([^/]+)",
    r"place_id=([^&]+)",
    r"maps\?.*?cid=(\d+)",
    r"maps/search/[^/@]+/@[^/]+/([^/]+)",
];

/// Query parameters checked when no pattern matched
const PLACE_ID_PARAMS: &[&str] = &["place_id", "pbid"];

/// Hosts serving Google Maps pages that can be rewritten to embed URLs
const GOOGLE_MAPS_HOSTS: &[&str] = &["maps.google.com", "www.google.com", "google.com"];

/// Where reviews come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationTarget {
    /// Places API lookup by place ID
    Place { place_id: String },
    /// My Business API lookup by account and location
    Business {
        account_id: String,
        location_id: String,
    },
}

impl LocationTarget {
    /// Pick a target from user input; direct business IDs win over a URL
    pub fn resolve(
        maps_url: Option<&str>,
        account_id: Option<&str>,
        location_id: Option<&str>,
    ) -> Result<Self, LocationError> {
        if let (Some(account_id), Some(location_id)) =
            (non_empty(account_id), non_empty(location_id))
        {
            return Ok(LocationTarget::Business {
                account_id: account_id.to_string(),
                location_id: location_id.to_string(),
            });
        }

        let url = non_empty(maps_url).ok_or(LocationError::Missing)?;
        let place_id = extract_place_id(url)
            .ok_or_else(|| LocationError::UnrecognisedUrl(url.to_string()))?;

        Ok(LocationTarget::Place { place_id })
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

impl std::fmt::Display for LocationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationTarget::Place { place_id } => write!(f, "place {}", place_id),
            LocationTarget::Business {
                account_id,
                location_id,
            } => write!(f, "accounts/{}/locations/{}", account_id, location_id),
        }
    }
}

/// Extract a place identifier from a Google Maps URL
pub fn extract_place_id(maps_url: &str) -> Option<String> {
    for pattern in PLACE_ID_PATTERNS {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("Invalid place ID pattern {}: {}", pattern, e);
                continue;
            }
        };
        if let Some(id) = re.captures(maps_url).and_then(|caps| caps.get(1)) {
            return Some(id.as_str().to_string());
        }
    }

    let url = Url::parse(maps_url).ok()?;
    PLACE_ID_PARAMS.iter().find_map(|key| {
        url.query_pairs()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.into_owned())
    })
}

/// Build an embeddable map URL for a Maps link
///
/// Uses the place ID when one can be extracted, otherwise rewrites
/// `/maps/` to `/maps/embed/` on Google Maps hosts.
pub fn embed_url(maps_url: &str, api_key: &str) -> Option<String> {
    if let Some(place_id) = extract_place_id(maps_url) {
        return Some(format!(
            "https://www.google.com/maps/embed/v1/place?q=place_id:{}&key={}",
            place_id, api_key
        ));
    }

    let url = Url::parse(maps_url).ok()?;
    let host = url.host_str()?;
    if !GOOGLE_MAPS_HOSTS.contains(&host) {
        return None;
    }

    let path = url.path();
    if path.starts_with("/maps/") && !path.starts_with("/maps/embed/") {
        return Some(maps_url.replacen("/maps/", "/maps/embed/", 1));
    }

    None
}
