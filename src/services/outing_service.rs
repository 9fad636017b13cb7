//! Outing plan orchestration.
//!
//! Wires the collaborator clients to the core ranking and selection:
//! resolve where the caller is, describe the weather, ask the generative
//! model for vibe categories, search and rank real places per category,
//! then select the best cross-category combination.

use futures::future::join_all;
use std::fmt;

use crate::models::location::ResolvedLocation;
use crate::models::outing::{OutingRequest, OutingResponse, PlaceInfo, StopInfo};
use crate::models::place::RankedPlace;
use crate::models::weather::WeatherConditions;
use crate::services::distance_service::haversine;
use crate::services::geolocation_service::GeolocationService;
use crate::services::itinerary_service::ItinerarySelector;
use crate::services::place_search_service::PlaceSearchService;
use crate::services::ranking_service::PlaceRanker;
use crate::services::suggestion_service::{SuggestionContext, SuggestionService};
use crate::services::weather_service::{describe_weather, WeatherService};

/// Raw candidates fetched per search phrase before ranking.
const CANDIDATES_PER_SEARCH: usize = 5;

#[derive(Debug)]
pub enum OutingError {
    /// Caller location neither supplied nor resolvable from the IP.
    LocationUnavailable,
    /// The generative collaborator returned nothing usable.
    SuggestionUnavailable,
}

impl fmt::Display for OutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutingError::LocationUnavailable => {
                write!(f, "Could not determine the caller's location")
            }
            OutingError::SuggestionUnavailable => {
                write!(f, "Could not generate outing suggestion in the expected format")
            }
        }
    }
}

impl std::error::Error for OutingError {}

#[derive(Clone)]
pub struct OutingService {
    geolocation: GeolocationService,
    weather: WeatherService,
    suggestions: SuggestionService,
    place_search: PlaceSearchService,
    ranker: PlaceRanker,
    selector: ItinerarySelector,
}

impl OutingService {
    /// Build the full service stack from environment configuration.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            geolocation: GeolocationService::new()?,
            weather: WeatherService::new()?,
            suggestions: SuggestionService::new()?,
            place_search: PlaceSearchService::new()?,
            ranker: PlaceRanker::new(),
            selector: ItinerarySelector::new(),
        })
    }

    pub async fn generate(&self, request: &OutingRequest) -> Result<OutingResponse, OutingError> {
        let location = self.resolve_location(request).await?;
        println!(
            "Location details: {}, {}, {}, {}, {}",
            location.city,
            location.region,
            location.country,
            location.point.latitude,
            location.point.longitude
        );

        let conditions = self.resolve_weather(request, &location).await;
        let weather = describe_weather(&conditions);

        let context = SuggestionContext {
            city: location.city.clone(),
            mood: request.mood.clone(),
            purpose: request.purpose.clone(),
            time_of_day: request.time_of_day.clone(),
            weather: weather.to_string(),
            number_of_people: request.number_of_people,
            type_of_people: request.type_of_people.clone(),
            hours_available: request.hours_available,
            max_travel_time: request.max_travel_time,
            transport_mode: request.transport_mode.clone(),
            budget: request.budget,
        };

        let suggestion = self.suggestions.suggest_outing(&context).await;
        let Some(stops) = suggestion.stops else {
            return Err(OutingError::SuggestionUnavailable);
        };

        // All stop searches run concurrently; each degrades independently
        // to an empty category on collaborator failure.
        let searches = stops
            .iter()
            .map(|stop| self.rank_stop_candidates(&stop.search_phrase, &location));
        let categories: Vec<Vec<RankedPlace>> = join_all(searches).await;

        let stop_infos: Vec<StopInfo> = stops
            .iter()
            .zip(categories.iter())
            .map(|(stop, ranked)| StopInfo {
                vibe_title: stop.vibe_title.clone(),
                search_phrase: stop.search_phrase.clone(),
                places: ranked
                    .iter()
                    .map(|ranked_place| PlaceInfo {
                        distance_from_origin: haversine(
                            location.point,
                            ranked_place.place.location,
                        ),
                        place: ranked_place.clone(),
                    })
                    .collect(),
            })
            .collect();

        let best_itinerary = self.selector.select_best(&categories);
        if best_itinerary.is_uncomputable() {
            println!("No itinerary combination was computable for this request");
        } else {
            println!(
                "Best itinerary: {:.2} km total, {:.2} average rating",
                best_itinerary.total_distance, best_itinerary.average_rating
            );
        }

        Ok(OutingResponse {
            location,
            weather: weather.to_string(),
            stops: stop_infos,
            best_itinerary,
            generated_at: chrono::Utc::now(),
        })
    }

    async fn resolve_location(
        &self,
        request: &OutingRequest,
    ) -> Result<ResolvedLocation, OutingError> {
        if let Some(location) = request.supplied_location() {
            return Ok(location);
        }

        self.geolocation
            .approximate_location()
            .await
            .ok_or(OutingError::LocationUnavailable)
    }

    async fn resolve_weather(
        &self,
        request: &OutingRequest,
        location: &ResolvedLocation,
    ) -> WeatherConditions {
        if let Some(conditions) = request.weather_conditions {
            return conditions;
        }

        match self.weather.current_conditions(location.point).await {
            Some(conditions) => conditions,
            None => {
                eprintln!("Weather lookup failed; assuming normal conditions");
                WeatherConditions::default()
            }
        }
    }

    async fn rank_stop_candidates(
        &self,
        search_phrase: &str,
        location: &ResolvedLocation,
    ) -> Vec<RankedPlace> {
        let candidates = self
            .place_search
            .text_search(search_phrase, Some(location.point), CANDIDATES_PER_SEARCH)
            .await;
        self.ranker.rank(&candidates)
    }
}
