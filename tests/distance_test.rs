use outing_api::models::place::GeoPoint;
use outing_api::services::distance_service::{haversine, haversine_with_radius, EARTH_RADIUS_KM};

const TOLERANCE_KM: f64 = 1e-6;

#[test]
fn distance_from_a_point_to_itself_is_zero() {
    let points = [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(45.0, -122.5),
        GeoPoint::new(-33.8688, 151.2093),
    ];

    for point in points {
        assert_eq!(haversine(point, point), 0.0);
    }
}

#[test]
fn distance_is_symmetric() {
    let chennai = GeoPoint::new(13.0878, 80.2785);
    let bengaluru = GeoPoint::new(12.9716, 77.5946);

    let forward = haversine(chennai, bengaluru);
    let backward = haversine(bengaluru, chennai);
    assert!((forward - backward).abs() < TOLERANCE_KM);
}

#[test]
fn colinear_points_on_the_equator_add_up() {
    let a = GeoPoint::new(0.0, 10.0);
    let b = GeoPoint::new(0.0, 11.0);
    let c = GeoPoint::new(0.0, 12.0);

    let direct = haversine(a, c);
    let via_midpoint = haversine(a, b) + haversine(b, c);
    assert!((direct - via_midpoint).abs() < TOLERANCE_KM);
}

#[test]
fn london_to_paris_is_about_344_km() {
    let london = GeoPoint::new(51.5074, -0.1278);
    let paris = GeoPoint::new(48.8566, 2.3522);

    let distance = haversine(london, paris);
    assert!((distance - 343.5).abs() < 2.0, "got {} km", distance);
}

#[test]
fn custom_radius_scales_the_result() {
    let a = GeoPoint::new(0.0, 0.0);
    let b = GeoPoint::new(0.0, 90.0);

    let on_earth = haversine_with_radius(a, b, EARTH_RADIUS_KM);
    let on_unit_sphere = haversine_with_radius(a, b, 1.0);
    assert!((on_earth - on_unit_sphere * EARTH_RADIUS_KM).abs() < TOLERANCE_KM);
}

#[test]
fn non_finite_input_propagates() {
    let origin = GeoPoint::new(0.0, 0.0);

    assert!(haversine(GeoPoint::new(f64::NAN, 0.0), origin).is_nan());
    assert!(haversine(GeoPoint::new(f64::INFINITY, 0.0), origin).is_nan());
}
