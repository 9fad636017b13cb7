//! Approximate caller location from the public IP via ipinfo.io.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::models::location::ResolvedLocation;
use crate::models::place::GeoPoint;

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
    /// Coordinates encoded as "lat,lon".
    loc: Option<String>,
}

#[derive(Clone)]
pub struct GeolocationService {
    client: Client,
}

impl GeolocationService {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self { client })
    }

    /// Best-effort lookup; any failure yields `None` and the caller
    /// decides how to degrade.
    pub async fn approximate_location(&self) -> Option<ResolvedLocation> {
        let response = match self.client.get("https://ipinfo.io/json").send().await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Error getting IP information: {}", e);
                return None;
            }
        };

        let data: IpInfoResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Failed to parse IP information: {}", e);
                return None;
            }
        };

        let point = parse_loc(data.loc.as_deref()?)?;

        Some(ResolvedLocation {
            city: data.city.unwrap_or_default(),
            region: data.region.unwrap_or_default(),
            country: data.country.unwrap_or_default(),
            point,
        })
    }
}

fn parse_loc(loc: &str) -> Option<GeoPoint> {
    let (lat, lon) = loc.split_once(',')?;
    Some(GeoPoint::new(
        lat.trim().parse().ok()?,
        lon.trim().parse().ok()?,
    ))
}
