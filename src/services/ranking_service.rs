//! Intra-category place ranking.
//!
//! Scores each candidate by a weighted blend of normalized rating and
//! normalized review count, then keeps the top N. Scores order places
//! within one category only; cross-category selection works from raw
//! ratings and distances instead.

use serde::{Deserialize, Serialize};

use crate::models::place::{Place, RankedPlace};

/// Upper bound of the rating scale used for normalization.
pub const MAX_RATING: f64 = 5.0;

const DEFAULT_RATING_WEIGHT: f64 = 0.7;
const DEFAULT_REVIEW_WEIGHT: f64 = 0.3;
const DEFAULT_TOP_N: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingWeights {
    /// Weight for the normalized star rating
    pub rating_weight: f64,
    /// Weight for the normalized review count
    pub review_weight: f64,
    /// Number of top places to keep per category
    pub top_n: usize,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            rating_weight: DEFAULT_RATING_WEIGHT,
            review_weight: DEFAULT_REVIEW_WEIGHT,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl RankingWeights {
    /// Create weights from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            rating_weight: std::env::var("RANK_RATING_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.rating_weight),
            review_weight: std::env::var("RANK_REVIEW_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.review_weight),
            top_n: std::env::var("RANK_TOP_N")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.top_n),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlaceRanker {
    pub weights: RankingWeights,
}

impl PlaceRanker {
    pub fn new() -> Self {
        let weights = RankingWeights::from_env();
        println!("PlaceRanker initialized with weights: {:?}", weights);
        Self { weights }
    }

    pub fn with_weights(weights: RankingWeights) -> Self {
        Self { weights }
    }

    /// Rank candidates within one category and keep the best `top_n`.
    ///
    /// An empty input yields an empty result. Score ties preserve input
    /// order (stable sort); there is no secondary key. A `top_n` larger
    /// than the input returns the whole ranked list.
    pub fn rank(&self, places: &[Place]) -> Vec<RankedPlace> {
        if places.is_empty() {
            return Vec::new();
        }

        // Floor of 1 so categories where nothing has reviews still rank.
        let max_review_count = places
            .iter()
            .map(|place| place.review_count)
            .max()
            .unwrap_or(0)
            .max(1);

        let mut ranked: Vec<RankedPlace> = places
            .iter()
            .map(|place| {
                let normalized_rating = place.rating / MAX_RATING;
                let normalized_reviews = place.review_count as f64 / max_review_count as f64;
                let score = normalized_rating * self.weights.rating_weight
                    + normalized_reviews * self.weights.review_weight;

                RankedPlace {
                    place: place.clone(),
                    score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(self.weights.top_n);

        ranked
    }
}
