use serde::{Deserialize, Serialize};

/// The two weather flags the planner cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub is_raining: bool,
    pub is_too_sunny: bool,
}
