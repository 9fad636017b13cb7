use std::sync::Arc;
use std::thread;

use outing_api::models::place::{GeoPoint, Place, RankedPlace};
use outing_api::services::distance_service::haversine;
use outing_api::services::itinerary_service::{ItinerarySelector, SelectionStrategy};

fn ranked(name: &str, rating: f64, lat: f64, lon: f64, score: f64) -> RankedPlace {
    RankedPlace {
        place: Place {
            name: name.to_string(),
            address: format!("{} road", name),
            place_id: format!("id-{}", name),
            rating,
            review_count: 25,
            location: GeoPoint::new(lat, lon),
        },
        score,
    }
}

fn selector() -> ItinerarySelector {
    ItinerarySelector::with_strategy(SelectionStrategy::Positional)
}

#[test]
fn no_categories_is_uncomputable() {
    let result = selector().select_best(&[]);

    assert!(result.is_uncomputable());
    assert!(result.places.is_none());
    assert_eq!(result.total_distance, f64::INFINITY);
    assert_eq!(result.average_rating, -1.0);
}

#[test]
fn any_empty_category_is_uncomputable() {
    let categories = vec![vec![ranked("a", 4.0, 13.0, 80.0, 0.9)], vec![]];
    assert!(selector().select_best(&categories).is_uncomputable());

    let only_empty = vec![Vec::new()];
    assert!(selector().select_best(&only_empty).is_uncomputable());
}

#[test]
fn single_pairing_at_same_point_has_zero_distance_and_mean_rating() {
    let categories = vec![
        vec![ranked("cafe", 4.0, 13.05, 80.25, 0.8)],
        vec![ranked("park", 5.0, 13.05, 80.25, 0.7)],
    ];

    let result = selector().select_best(&categories);
    let places = result.places.expect("combination expected");

    assert_eq!(places.len(), 2);
    assert_eq!(result.total_distance, 0.0);
    assert!((result.average_rating - 4.5).abs() < 1e-12);
}

#[test]
fn positional_pairing_picks_the_closer_index() {
    // Index 0 pairs two neighbouring places; index 1 pairs places half a
    // degree apart. The index-1 entries carry the higher intra-category
    // scores, which must not influence the outcome.
    let categories = vec![
        vec![
            ranked("a0", 3.0, 13.00, 80.00, 0.5),
            ranked("a1", 5.0, 13.00, 80.00, 0.9),
        ],
        vec![
            ranked("b0", 3.0, 13.01, 80.01, 0.5),
            ranked("b1", 5.0, 13.50, 80.50, 0.9),
        ],
    ];

    let result = selector().select_best(&categories);
    let places = result.places.expect("combination expected");

    assert_eq!(places[0].name, "a0");
    assert_eq!(places[1].name, "b0");
}

#[test]
fn positional_pairing_stops_at_the_shortest_category() {
    let categories = vec![
        vec![
            ranked("a0", 4.0, 13.00, 80.00, 0.9),
            ranked("a1", 4.0, 14.00, 81.00, 0.8),
        ],
        vec![ranked("b0", 4.0, 13.20, 80.20, 0.9)],
    ];

    let result = selector().select_best(&categories);
    let places = result.places.expect("combination expected");

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "a0");
    assert_eq!(places[1].name, "b0");
}

#[test]
fn exact_distance_tie_prefers_higher_average_rating() {
    // Both pairings are co-located (zero distance); the second carries
    // the better ratings.
    let categories = vec![
        vec![
            ranked("a0", 3.0, 13.0, 80.0, 0.9),
            ranked("a1", 5.0, 13.0, 80.0, 0.1),
        ],
        vec![
            ranked("b0", 3.0, 13.0, 80.0, 0.9),
            ranked("b1", 5.0, 13.0, 80.0, 0.1),
        ],
    ];

    let result = selector().select_best(&categories);
    let places = result.places.expect("combination expected");

    assert_eq!(places[0].name, "a1");
    assert_eq!(result.average_rating, 5.0);
}

#[test]
fn first_seen_combination_wins_a_full_tie() {
    let categories = vec![
        vec![
            ranked("a0", 4.0, 13.0, 80.0, 0.9),
            ranked("a1", 4.0, 13.0, 80.0, 0.9),
        ],
        vec![
            ranked("b0", 4.0, 13.0, 80.0, 0.9),
            ranked("b1", 4.0, 13.0, 80.0, 0.9),
        ],
    ];

    let places = selector()
        .select_best(&categories)
        .places
        .expect("combination expected");
    assert_eq!(places[0].name, "a0");
    assert_eq!(places[1].name, "b0");
}

#[test]
fn three_category_distance_sums_all_unordered_pairs() {
    let categories = vec![
        vec![ranked("a", 4.0, 0.0, 0.0, 0.5)],
        vec![ranked("b", 4.0, 0.0, 1.0, 0.5)],
        vec![ranked("c", 4.0, 0.0, 2.0, 0.5)],
    ];

    let result = selector().select_best(&categories);

    // ab + bc + ac, where ac spans two degrees along the equator.
    let one_degree = haversine(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
    let expected = one_degree * 4.0;
    assert!((result.total_distance - expected).abs() < 1e-6);
}

#[test]
fn exhaustive_strategy_finds_cross_index_combinations() {
    // The best pair crosses indices (a0 with b1); positional pairing
    // cannot see it.
    let categories = vec![
        vec![
            ranked("a0", 4.0, 13.00, 80.00, 0.9),
            ranked("a1", 4.0, 15.00, 82.00, 0.8),
        ],
        vec![
            ranked("b0", 4.0, 14.00, 81.00, 0.9),
            ranked("b1", 4.0, 13.001, 80.001, 0.8),
        ],
    ];

    let positional =
        ItinerarySelector::with_strategy(SelectionStrategy::Positional).select_best(&categories);
    let exhaustive =
        ItinerarySelector::with_strategy(SelectionStrategy::Exhaustive).select_best(&categories);

    let positional_places = positional.places.expect("combination expected");
    assert_eq!(positional_places[1].name, "b0");

    let exhaustive_places = exhaustive.places.expect("combination expected");
    assert_eq!(exhaustive_places[0].name, "a0");
    assert_eq!(exhaustive_places[1].name, "b1");
    assert!(exhaustive.total_distance < positional.total_distance);
}

#[test]
fn exhaustive_strategy_covers_the_whole_product_of_three_categories() {
    // Unique winning combination sits at indices (1, 0, 1); all other 7
    // combinations include at least one far-away place.
    let near = 13.0;
    let far = 18.0;
    let categories = vec![
        vec![
            ranked("a-far", 4.0, far, 80.0, 0.9),
            ranked("a-near", 4.0, near, 80.0, 0.1),
        ],
        vec![
            ranked("b-near", 4.0, near, 80.01, 0.9),
            ranked("b-far", 4.0, far, 81.0, 0.1),
        ],
        vec![
            ranked("c-far", 4.0, far, 82.0, 0.9),
            ranked("c-near", 4.0, near, 80.02, 0.1),
        ],
    ];

    let result =
        ItinerarySelector::with_strategy(SelectionStrategy::Exhaustive).select_best(&categories);
    let names: Vec<&str> = result
        .places
        .as_ref()
        .expect("combination expected")
        .iter()
        .map(|place| place.name.as_str())
        .collect();

    assert_eq!(names, vec!["a-near", "b-near", "c-near"]);
}

#[test]
fn concurrent_selection_matches_sequential_results() {
    let categories = Arc::new(vec![
        vec![
            ranked("a0", 4.2, 13.00, 80.00, 0.9),
            ranked("a1", 3.9, 13.10, 80.10, 0.8),
        ],
        vec![
            ranked("b0", 4.8, 13.02, 80.03, 0.7),
            ranked("b1", 4.1, 13.12, 80.09, 0.6),
        ],
        vec![
            ranked("c0", 3.5, 13.01, 80.02, 0.5),
            ranked("c1", 4.9, 13.11, 80.11, 0.4),
        ],
    ]);

    let sequential = selector().select_best(&categories);
    let expected_names: Vec<String> = sequential
        .places
        .as_ref()
        .expect("combination expected")
        .iter()
        .map(|place| place.name.clone())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let categories = Arc::clone(&categories);
            thread::spawn(move || {
                ItinerarySelector::with_strategy(SelectionStrategy::Positional)
                    .select_best(&categories)
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("selection thread panicked");
        assert_eq!(result.total_distance, sequential.total_distance);
        assert_eq!(result.average_rating, sequential.average_rating);

        let names: Vec<String> = result
            .places
            .as_ref()
            .expect("combination expected")
            .iter()
            .map(|place| place.name.clone())
            .collect();
        assert_eq!(names, expected_names);
    }
}
