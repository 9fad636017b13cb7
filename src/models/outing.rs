use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::itinerary::ItinerarySelection;
use crate::models::location::ResolvedLocation;
use crate::models::place::{GeoPoint, RankedPlace};
use crate::models::weather::WeatherConditions;

/// POST body for an outing request. The location and weather fields are
/// optional; when absent they are resolved through the geolocation and
/// weather collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutingRequest {
    pub mood: String,
    pub purpose: String,
    pub time_of_day: String,
    pub number_of_people: u32,
    pub type_of_people: String,
    pub hours_available: f64,
    /// Maximum travel time per stop, in minutes.
    pub max_travel_time: u32,
    pub transport_mode: String,
    /// Budget per person, in local currency.
    pub budget: f64,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub weather_conditions: Option<WeatherConditions>,
}

impl OutingRequest {
    /// Location fields count as supplied only when the full set is present.
    pub fn supplied_location(&self) -> Option<ResolvedLocation> {
        match (&self.city, &self.region, &self.country, self.lat, self.lon) {
            (Some(city), Some(region), Some(country), Some(lat), Some(lon)) => {
                Some(ResolvedLocation {
                    city: city.clone(),
                    region: region.clone(),
                    country: country.clone(),
                    point: GeoPoint::new(lat, lon),
                })
            }
            _ => None,
        }
    }
}

/// One ranked place in a stop, annotated with its distance from the
/// request origin in kilometers.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceInfo {
    #[serde(flatten)]
    pub place: RankedPlace,
    pub distance_from_origin: f64,
}

/// One suggested stop with its ranked candidates.
#[derive(Debug, Clone, Serialize)]
pub struct StopInfo {
    pub vibe_title: String,
    pub search_phrase: String,
    pub places: Vec<PlaceInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutingResponse {
    pub location: ResolvedLocation,
    /// Weather descriptor that was fed into prompt construction.
    pub weather: String,
    pub stops: Vec<StopInfo>,
    pub best_itinerary: ItinerarySelection,
    pub generated_at: DateTime<Utc>,
}
