pub mod itinerary;
pub mod location;
pub mod outing;
pub mod place;
pub mod suggestion;
pub mod weather;
