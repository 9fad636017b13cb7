use serde::{Deserialize, Serialize};

/// Valid suggestion sizes: short outings get 2 stops, longer ones 3.
pub const MIN_STOPS: usize = 2;
pub const MAX_STOPS: usize = 3;

/// One "vibe" category suggested by the generative collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutingStop {
    pub vibe_title: String,
    pub search_phrase: String,
}

/// The generative collaborator's answer. `stops: None` means it failed to
/// produce anything usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutingSuggestion {
    pub stops: Option<Vec<OutingStop>>,
}

impl OutingSuggestion {
    pub fn unavailable() -> Self {
        Self { stops: None }
    }

    pub fn is_valid(&self) -> bool {
        matches!(&self.stops, Some(stops) if (MIN_STOPS..=MAX_STOPS).contains(&stops.len()))
    }
}
