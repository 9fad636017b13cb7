use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A real-world place candidate as produced by the place-search
/// collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub place_id: String,
    /// Star rating on a 0.0-5.0 scale; places without one carry 0.0.
    #[serde(default)]
    pub rating: f64,
    /// Total user review count; places without reviews carry 0.
    #[serde(default)]
    pub review_count: u32,
    #[serde(flatten)]
    pub location: GeoPoint,
}

/// A place with its intra-category ranking score attached.
///
/// The score orders places within one ranking call only and must never be
/// compared across categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPlace {
    #[serde(flatten)]
    pub place: Place,
    pub score: f64,
}
