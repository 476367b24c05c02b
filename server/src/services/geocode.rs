//! Reverse-geocoding relay backed by the Nominatim public API.
//!
//! The upstream address object is passed through verbatim; only the
//! city/state/country display string is derived here, in the pure
//! [`compose_location`] function.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = "TouristBuddy-Hackathon-App";
const ZOOM: &str = "10";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The HTTP request to the geocoding provider failed.
    #[error("geocode request failed: {0}")]
    Request(String),

    /// The geocoding provider returned a non-success HTTP status.
    #[error("Nominatim API responded with status: {0}")]
    UpstreamStatus(u16),

    /// The provider response body could not be deserialized.
    #[error("geocode response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Build a client, honoring a `NOMINATIM_BASE_URL` override.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_env() -> Result<Self, GeocodeError> {
        let base_url = std::env::var("NOMINATIM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Build a client against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: String) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| GeocodeError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// Reverse-geocode a coordinate pair, returning the raw upstream JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success upstream status,
    /// or an unparseable body.
    pub async fn reverse(&self, latitude: &str, longitude: &str) -> Result<serde_json::Value, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", latitude),
                ("lon", longitude),
                ("format", "json"),
                ("accept-language", "en"),
                ("zoom", ZOOM),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UpstreamStatus(status.as_u16()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))
    }
}

// =============================================================================
// LOCATION COMPOSITION
// =============================================================================

/// A display location derived from a reverse-geocode address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub city: String,
    pub full_location: String,
}

/// Derive the display location from a Nominatim `address` object.
///
/// The city falls back through town, village, then county; the state falls
/// back to region. Returns `None` when no city-like field is present.
#[must_use]
pub fn compose_location(address: &serde_json::Value) -> Option<ResolvedLocation> {
    let field = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| address.get(*k).and_then(|v| v.as_str()).filter(|s| !s.is_empty()))
    };

    let city = field(&["city", "town", "village", "county"])?;
    let state = field(&["state", "region"]);
    let country = field(&["country"]);

    let full_location = match (state, country) {
        (Some(state), Some(country)) => format!("{city}, {state}, {country}"),
        (None, Some(country)) => format!("{city}, {country}"),
        _ => city.to_string(),
    };

    Some(ResolvedLocation { city: city.to_string(), full_location })
}

#[cfg(test)]
#[path = "geocode_test.rs"]
mod tests;
