use serde::Serialize;

use crate::models::place::Place;

/// Result of cross-category itinerary selection.
///
/// When a combination exists, `places` holds exactly one place per input
/// category in category order. The uncomputable sentinel is `places: None`
/// with an infinite total distance and a -1.0 average rating; callers must
/// check `is_uncomputable` before trusting the aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct ItinerarySelection {
    pub places: Option<Vec<Place>>,
    /// Sum of great-circle distances over all unordered pairs, in km.
    pub total_distance: f64,
    pub average_rating: f64,
}

impl ItinerarySelection {
    pub fn uncomputable() -> Self {
        Self {
            places: None,
            total_distance: f64::INFINITY,
            average_rating: -1.0,
        }
    }

    pub fn is_uncomputable(&self) -> bool {
        self.places.is_none()
    }
}
