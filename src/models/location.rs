use serde::{Deserialize, Serialize};

use crate::models::place::GeoPoint;

/// Approximate caller location, either supplied with the request or
/// resolved from the public IP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub city: String,
    pub region: String,
    pub country: String,
    #[serde(flatten)]
    pub point: GeoPoint,
}
