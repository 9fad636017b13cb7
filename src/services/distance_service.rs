//! Great-circle distance calculations.
//!
//! Pure haversine math shared by the itinerary selector and response
//! assembly. No network calls, no state; safe to call from any number of
//! workers concurrently.

use crate::models::place::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine_with_radius(a, b, EARTH_RADIUS_KM)
}

/// Haversine distance on a sphere of the given radius.
///
/// NaN or infinite coordinates propagate into the result; no special
/// handling.
pub fn haversine_with_radius(a: GeoPoint, b: GeoPoint, radius: f64) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    radius * c
}
