//! Place-search relay — passthrough to the Qloo taste API.
//!
//! Results are not reshaped: the upstream JSON body and HTTP status are
//! relayed to the caller verbatim. Ranking and relevance are entirely the
//! provider's concern.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_QLOO_BASE_URL: &str = "https://hackathon.api.qloo.com";
const REQUEST_TIMEOUT_SECS: u64 = 15;
const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the search provider failed.
    #[error("search request failed: {0}")]
    Request(String),

    /// The provider response body could not be deserialized.
    #[error("search response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Query-string parameters forwarded to the search provider unmodified.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub types: Option<String>,
    pub query: Option<String>,
    pub filter_popularity_min: Option<String>,
    pub location: Option<String>,
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SearchClient {
    /// Build a client from environment variables.
    ///
    /// Required: `QLOO_API_KEY`. Optional: `QLOO_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to build.
    pub fn from_env() -> Result<Self, SearchError> {
        let api_key = std::env::var("QLOO_API_KEY")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(SearchError::MissingApiKey { var: "QLOO_API_KEY".into() })?;
        let base_url = std::env::var("QLOO_API_URL").unwrap_or_else(|_| DEFAULT_QLOO_BASE_URL.to_string());
        Self::new(api_key, base_url)
    }

    /// Build a client against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: String, base_url: String) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| SearchError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// Forward a search to the provider, returning its status and body
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unparseable body; the
    /// upstream HTTP status is not an error here, it is part of the result.
    pub async fn search(&self, params: &SearchParams) -> Result<(u16, serde_json::Value), SearchError> {
        let url = format!("{}/search", self.base_url);

        let mut query: Vec<(&str, &str)> = Vec::new();
        for (name, value) in [
            ("types", &params.types),
            ("query", &params.query),
            ("filter_popularity_min", &params.filter_popularity_min),
            ("location", &params.location),
        ] {
            if let Some(value) = value {
                query.push((name, value.as_str()));
            }
        }

        let response = self
            .http
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(&query)
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok((status, body))
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
