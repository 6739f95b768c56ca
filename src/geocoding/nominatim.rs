// src/geocoding/nominatim.rs
use crate::domain::location::Coordinates;
use crate::geocoding::{Geocoder, GeocodingError};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

/// OpenStreetMap Nominatim over its JSON API.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

#[derive(Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<ReverseAddress>,
}

#[derive(Deserialize)]
struct ReverseAddress {
    #[serde(default)]
    state: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| GeocodingError::Failed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get(&self, path: &str, params: &[(&str, String)]) -> Result<String, GeocodingError> {
        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .query(params)
            .send()?;

        let resp = check_status(resp)?;
        Ok(resp.text()?)
    }
}

impl Geocoder for NominatimGeocoder {
    fn forward(&self, query: &str) -> Result<Option<Coordinates>, GeocodingError> {
        let body = self.get(
            "/search",
            &[
                ("q", query.to_string()),
                ("format", "json".to_string()),
                ("limit", "1".to_string()),
            ],
        )?;
        parse_search(&body)
    }

    fn reverse(&self, coordinates: Coordinates) -> Result<Option<String>, GeocodingError> {
        let body = self.get(
            "/reverse",
            &[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("format", "json".to_string()),
                ("accept-language", "en".to_string()),
            ],
        )?;
        parse_reverse(&body)
    }
}

fn check_status(resp: Response) -> Result<Response, GeocodingError> {
    let status = resp.status();
    match status.as_u16() {
        429 | 509 => Err(GeocodingError::QuotaExceeded),
        _ if status.is_success() => Ok(resp),
        _ => Err(GeocodingError::Failed(format!("Nominatim HTTP {status}"))),
    }
}

fn parse_search(body: &str) -> Result<Option<Coordinates>, GeocodingError> {
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|e| GeocodingError::Failed(e.to_string()))?;

    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    let parse = |raw: &str| {
        raw.parse::<f64>()
            .map_err(|_| GeocodingError::Failed(format!("bad coordinate {raw:?}")))
    };

    Ok(Some(Coordinates {
        latitude: parse(&hit.lat)?,
        longitude: parse(&hit.lon)?,
    }))
}

fn parse_reverse(body: &str) -> Result<Option<String>, GeocodingError> {
    let resp: ReverseResponse =
        serde_json::from_str(body).map_err(|e| GeocodingError::Failed(e.to_string()))?;

    Ok(resp
        .address
        .and_then(|a| a.state)
        .filter(|s| !s.is_empty()))
}
