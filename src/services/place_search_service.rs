//! Place search over the Google Places Text Search API.
//!
//! Collaborator boundary: failures degrade to an empty candidate list so a
//! single bad search never fails the whole outing request.

use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::models::place::{GeoPoint, Place};

const DEFAULT_SEARCH_RADIUS_METERS: u32 = 5000;

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<TextSearchResult>,
}

#[derive(Debug, Deserialize)]
struct TextSearchResult {
    name: Option<String>,
    formatted_address: Option<String>,
    place_id: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Clone)]
pub struct PlaceSearchService {
    client: Client,
    api_key: String,
}

impl PlaceSearchService {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let api_key = env::var("GOOGLE_PLACES_API_KEY")
            .map_err(|_| "GOOGLE_PLACES_API_KEY environment variable not set")?;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self { client, api_key })
    }

    /// Text search, biased around an optional origin. Returns at most
    /// `max_results` places; API errors and unusable entries yield fewer,
    /// never an `Err`.
    pub async fn text_search(
        &self,
        query: &str,
        origin: Option<GeoPoint>,
        max_results: usize,
    ) -> Vec<Place> {
        let mut request = self
            .client
            .get("https://maps.googleapis.com/maps/api/place/textsearch/json")
            .query(&[("query", query), ("key", self.api_key.as_str())]);

        if let Some(origin) = origin {
            request = request.query(&[
                (
                    "location",
                    format!("{},{}", origin.latitude, origin.longitude),
                ),
                ("radius", DEFAULT_SEARCH_RADIUS_METERS.to_string()),
            ]);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Place search request failed for '{}': {}", query, e);
                return Vec::new();
            }
        };

        let data: TextSearchResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Failed to parse place search response for '{}': {}", query, e);
                return Vec::new();
            }
        };

        if data.status != "OK" {
            eprintln!(
                "Place search API error for '{}': {} {}",
                query,
                data.status,
                data.error_message.unwrap_or_default()
            );
            return Vec::new();
        }

        data.results
            .into_iter()
            .take(max_results)
            .filter_map(into_place)
            .collect()
    }
}

/// Missing rating/review_count map to zero; entries without coordinates
/// are dropped since neither ranking nor selection can use them.
fn into_place(result: TextSearchResult) -> Option<Place> {
    let geometry = result.geometry?;

    Some(Place {
        name: result.name.unwrap_or_default(),
        address: result.formatted_address.unwrap_or_default(),
        place_id: result.place_id.unwrap_or_default(),
        rating: result.rating.unwrap_or(0.0),
        review_count: result.user_ratings_total.unwrap_or(0),
        location: GeoPoint::new(geometry.location.lat, geometry.location.lng),
    })
}
