//! Weather lookup and classification.
//!
//! Fetches current conditions from weatherapi.com and reduces them to the
//! two flags the planner cares about, plus the fixed descriptor strings
//! consumed by prompt construction.

use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::models::place::GeoPoint;
use crate::models::weather::WeatherConditions;

// Daytime thresholds for the "too sunny" call.
const CLEAR_SKY_CLOUD_COVER: f64 = 30.0;
const HIGH_UV_INDEX: f64 = 7.0;
const HIGH_HEAT_C: f64 = 38.0;

/// Turn the raw weather flags into the descriptor consumed by prompt
/// construction.
pub fn describe_weather(conditions: &WeatherConditions) -> &'static str {
    match (conditions.is_raining, conditions.is_too_sunny) {
        (true, true) => "It is raining even though it is too sunny.",
        (true, false) => "It is currently raining.",
        (false, true) => "It is too sunny right now.",
        (false, false) => "The weather conditions are normal.",
    }
}

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    #[serde(default)]
    precip_mm: f64,
    #[serde(default)]
    precip_in: f64,
    #[serde(default)]
    is_day: u8,
    #[serde(default = "full_cloud_cover")]
    cloud: f64,
    #[serde(default)]
    uv: f64,
    heatindex_c: Option<f64>,
    feelslike_c: Option<f64>,
    #[serde(default)]
    condition: ConditionText,
}

// Missing cloud data must not read as a clear sky.
fn full_cloud_cover() -> f64 {
    100.0
}

#[derive(Debug, Default, Deserialize)]
struct ConditionText {
    #[serde(default)]
    text: String,
}

#[derive(Clone)]
pub struct WeatherService {
    client: Client,
    api_key: String,
}

impl WeatherService {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let api_key = env::var("WEATHER_API_KEY")
            .map_err(|_| "WEATHER_API_KEY environment variable not set")?;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self { client, api_key })
    }

    /// Fetch current conditions for a point. Any failure is recoverable
    /// and yields `None`.
    pub async fn current_conditions(&self, point: GeoPoint) -> Option<WeatherConditions> {
        let url = format!(
            "https://api.weatherapi.com/v1/current.json?key={}&q={},{}&aqi=yes",
            self.api_key, point.latitude, point.longitude
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Weather API request failed: {}", e);
                return None;
            }
        };

        let data: WeatherApiResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Failed to parse weather response: {}", e);
                return None;
            }
        };

        Some(classify(&data.current))
    }
}

fn classify(current: &CurrentConditions) -> WeatherConditions {
    let is_raining = current.precip_mm > 0.0 || current.precip_in > 0.0;

    let mut is_too_sunny = false;
    if current.is_day == 1 {
        if current.condition.text.eq_ignore_ascii_case("sunny")
            || (current.cloud < CLEAR_SKY_CLOUD_COVER && current.uv > HIGH_UV_INDEX)
        {
            is_too_sunny = true;
        } else if current.heatindex_c.map_or(false, |t| t > HIGH_HEAT_C)
            || current.feelslike_c.map_or(false, |t| t > HIGH_HEAT_C)
        {
            is_too_sunny = true;
        }
    }

    WeatherConditions {
        is_raining,
        is_too_sunny,
    }
}
