//! Cross-category itinerary selection.
//!
//! Consumes one ranked candidate list per suggested category and picks the
//! combination (one place per category) with the smallest total pairwise
//! distance, preferring higher average rating on exact distance ties.
//! Selection looks only at raw ratings and locations; the intra-category
//! ranking score never crosses this boundary.

use crate::models::itinerary::ItinerarySelection;
use crate::models::place::{Place, RankedPlace};
use crate::services::distance_service::haversine;

/// How combinations are enumerated across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Pair elements at the same index across all categories, up to the
    /// shortest category length. Matches the behavior the service shipped
    /// with and evaluates at most min(category length) combinations.
    #[default]
    Positional,
    /// Evaluate the full Cartesian product of the categories.
    Exhaustive,
}

impl SelectionStrategy {
    /// Read the strategy from `ITINERARY_SELECTION_STRATEGY`
    /// (`positional` | `exhaustive`), defaulting to positional pairing.
    pub fn from_env() -> Self {
        match std::env::var("ITINERARY_SELECTION_STRATEGY") {
            Ok(value) if value.eq_ignore_ascii_case("exhaustive") => SelectionStrategy::Exhaustive,
            _ => SelectionStrategy::Positional,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ItinerarySelector {
    pub strategy: SelectionStrategy,
}

impl ItinerarySelector {
    pub fn new() -> Self {
        let strategy = SelectionStrategy::from_env();
        println!("ItinerarySelector initialized with strategy: {:?}", strategy);
        Self { strategy }
    }

    pub fn with_strategy(strategy: SelectionStrategy) -> Self {
        Self { strategy }
    }

    /// Select the best combination of one place per category.
    ///
    /// Returns the uncomputable sentinel when `categories` is empty or any
    /// category has no candidates.
    pub fn select_best(&self, categories: &[Vec<RankedPlace>]) -> ItinerarySelection {
        if categories.is_empty() || categories.iter().any(|category| category.is_empty()) {
            return ItinerarySelection::uncomputable();
        }

        match self.strategy {
            SelectionStrategy::Positional => select_positional(categories),
            SelectionStrategy::Exhaustive => select_exhaustive(categories),
        }
    }
}

fn select_positional(categories: &[Vec<RankedPlace>]) -> ItinerarySelection {
    let pairings = categories
        .iter()
        .map(|category| category.len())
        .min()
        .unwrap_or(0);

    let mut best = ItinerarySelection::uncomputable();
    for index in 0..pairings {
        let combination: Vec<&Place> = categories
            .iter()
            .map(|category| &category[index].place)
            .collect();
        consider(&mut best, &combination);
    }

    best
}

fn select_exhaustive(categories: &[Vec<RankedPlace>]) -> ItinerarySelection {
    let mut indices = vec![0usize; categories.len()];
    let mut best = ItinerarySelection::uncomputable();

    loop {
        let combination: Vec<&Place> = indices
            .iter()
            .zip(categories.iter())
            .map(|(&index, category)| &category[index].place)
            .collect();
        consider(&mut best, &combination);

        // Advance the index odometer, rightmost category fastest.
        let mut position = categories.len() - 1;
        loop {
            indices[position] += 1;
            if indices[position] < categories[position].len() {
                break;
            }
            indices[position] = 0;
            if position == 0 {
                return best;
            }
            position -= 1;
        }
    }
}

/// Fold one combination into the running best: strictly smaller total
/// distance wins; an exact distance tie is broken by strictly higher
/// average rating; otherwise the first-seen combination stays.
fn consider(best: &mut ItinerarySelection, combination: &[&Place]) {
    let (total_distance, average_rating) = evaluate(combination);

    if total_distance < best.total_distance
        || (total_distance == best.total_distance && average_rating > best.average_rating)
    {
        best.places = Some(combination.iter().map(|place| (*place).clone()).collect());
        best.total_distance = total_distance;
        best.average_rating = average_rating;
    }
}

/// Total pairwise distance (over unordered pairs) and mean raw rating.
fn evaluate(combination: &[&Place]) -> (f64, f64) {
    let average_rating =
        combination.iter().map(|place| place.rating).sum::<f64>() / combination.len() as f64;

    let mut total_distance = 0.0;
    for i in 0..combination.len() {
        for j in (i + 1)..combination.len() {
            total_distance += haversine(combination[i].location, combination[j].location);
        }
    }

    (total_distance, average_rating)
}
