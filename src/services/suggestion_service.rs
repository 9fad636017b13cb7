//! Outing suggestion generation via the Gemini API.
//!
//! Asks the model for 2-3 vibe categories as strict JSON, then extracts
//! and validates the object from whatever prose surrounds it. Every
//! failure mode collapses to `OutingSuggestion { stops: None }` so the
//! caller can report an unavailable suggestion instead of crashing.

use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::time::Duration;

use crate::models::suggestion::{OutingSuggestion, MAX_STOPS, MIN_STOPS};

const GEMINI_MODEL: &str = "gemini-2.5-flash";
const GENERATION_TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 10000;

/// Hours below which the plan shrinks to two stops.
const SHORT_OUTING_HOURS: f64 = 2.5;

/// Context assembled by the orchestrator for prompt construction.
#[derive(Debug, Clone)]
pub struct SuggestionContext {
    pub city: String,
    pub mood: String,
    pub purpose: String,
    pub time_of_day: String,
    pub weather: String,
    pub number_of_people: u32,
    pub type_of_people: String,
    pub hours_available: f64,
    pub max_travel_time: u32,
    pub transport_mode: String,
    pub budget: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Clone)]
pub struct SuggestionService {
    client: Client,
    api_key: String,
}

impl SuggestionService {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY environment variable not set")?;

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self { client, api_key })
    }

    /// Ask the model for an outing plan. Network errors, malformed output
    /// and invalid stop counts all map to an unavailable suggestion.
    pub async fn suggest_outing(&self, context: &SuggestionContext) -> OutingSuggestion {
        let prompt = build_prompt(context);
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            GEMINI_MODEL, self.api_key
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": GENERATION_TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            }
        });

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Error generating outing suggestion: {}", e);
                return OutingSuggestion::unavailable();
            }
        };

        let data: GenerateContentResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Failed to parse suggestion response: {}", e);
                return OutingSuggestion::unavailable();
            }
        };

        let raw_output = data
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .unwrap_or_default();

        parse_suggestion(&raw_output)
    }
}

/// Extract the first JSON object from the model output and validate the
/// stop count.
pub fn parse_suggestion(raw_output: &str) -> OutingSuggestion {
    let Ok(json_pattern) = Regex::new(r"(?s)\{.*\}") else {
        return OutingSuggestion::unavailable();
    };

    let Some(matched) = json_pattern.find(raw_output) else {
        eprintln!("No JSON found in model output: {}", raw_output);
        return OutingSuggestion::unavailable();
    };

    let suggestion: OutingSuggestion = match serde_json::from_str(matched.as_str()) {
        Ok(suggestion) => suggestion,
        Err(e) => {
            eprintln!("Model output was not valid suggestion JSON: {}", e);
            return OutingSuggestion::unavailable();
        }
    };

    if suggestion.is_valid() {
        suggestion
    } else {
        if let Some(stops) = &suggestion.stops {
            eprintln!(
                "Model suggested {} stops, expected {} or {}",
                stops.len(),
                MIN_STOPS,
                MAX_STOPS
            );
        }
        OutingSuggestion::unavailable()
    }
}

fn build_prompt(context: &SuggestionContext) -> String {
    let stop_count = if context.hours_available < SHORT_OUTING_HOURS {
        2
    } else {
        3
    };

    format!(
        r#"You are a cultural concierge for young travelers and families.

Your task is to suggest a short, realistic {stop_count}-stop outing plan.
The outing should feel smooth, spontaneous, and enjoyable, like something they could actually do today.

Context:
- City: {city}
- Mood: {mood}
- Purpose: {purpose}
- Time of day: {time_of_day}
- Weather: {weather}
- Number of people: {number_of_people} ({type_of_people})
- Total time available: {hours_available} hours
- Budget: {budget} per person

Instructions:
- Suggest exactly {stop_count} stops
- Suggest only categories/types of places, not specific names
- Avoid rare/uncommon place types
- Ensure all stops are logically connected (walkable or short drive)
- Follow an energy curve (e.g., calm -> active -> chill), adapt to mood/purpose
- Max travel per stop: {max_travel_time} minutes by {transport_mode}
- Output ONLY a valid JSON object with key "stops" as a list of {{"vibe_title", "search_phrase"}} dictionaries"#,
        stop_count = stop_count,
        city = context.city,
        mood = context.mood,
        purpose = context.purpose,
        time_of_day = context.time_of_day,
        weather = context.weather,
        number_of_people = context.number_of_people,
        type_of_people = context.type_of_people,
        hours_available = context.hours_available,
        budget = context.budget,
        max_travel_time = context.max_travel_time,
        transport_mode = context.transport_mode,
    )
}
