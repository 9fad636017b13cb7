pub mod distance_service;
pub mod geolocation_service;
pub mod itinerary_service;
pub mod outing_service;
pub mod place_search_service;
pub mod ranking_service;
pub mod suggestion_service;
pub mod weather_service;
