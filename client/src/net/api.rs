//! REST API helpers for communicating with the relay server.
//!
//! Browser builds (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `None`/error so pure logic stays testable
//! without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! provider failures degrade page behavior without crashing the app.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatMessage, GeocodedLocation, ParsedQuery, Place, User};
use crate::util::location::popularity_fraction;
#[cfg(feature = "csr")]
use serde::Deserialize;

/// Entity type forwarded to the place search. The parser answers in plain
/// words ("restaurant"), the taste API wants a URN; anything that is not
/// already a URN becomes the generic place entity.
fn search_entity_type(kind: &str) -> String {
    if kind.starts_with("urn:") {
        kind.to_owned()
    } else {
        "urn:entity:place".to_owned()
    }
}

#[cfg(any(test, feature = "csr"))]
fn geocode_endpoint(latitude: f64, longitude: f64) -> String {
    format!("/api/location/geocode?latitude={latitude}&longitude={longitude}")
}

#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[cfg(feature = "csr")]
async fn error_message(resp: gloo_net::http::Response, fallback: &str) -> String {
    match resp.json::<ErrorBody>().await {
        Ok(ErrorBody { error: Some(message) }) => message,
        _ => fallback.to_owned(),
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Sign in via `POST /api/auth/login`. The session cookie is set by the
/// server on success.
///
/// # Errors
///
/// Returns the server's error message when the credentials are rejected, or
/// a transport error string.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp, "Login failed").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

// =============================================================================
// ASSISTANT
// =============================================================================

#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct AssistantResponse {
    response: String,
}

/// Fetch the location-aware greeting via `POST /api/gemini/init-chat`.
/// Returns `None` on any failure; callers show their own welcome text.
pub async fn fetch_greeting(location: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "location": location });
        let resp = gloo_net::http::Request::post("/api/gemini/init-chat")
            .json(&payload)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AssistantResponse>().await.ok().map(|b| b.response)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = location;
        None
    }
}

/// Send a chat message via `POST /api/gemini/chat`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn send_chat(message: &str, location: &str, history: &[ChatMessage]) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({
            "message": message,
            "location": location,
            "conversationHistory": history,
        });
        let resp = gloo_net::http::Request::post("/api/gemini/chat")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("chat request failed: {}", resp.status()));
        }
        let body: AssistantResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.response)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (message, location, history);
        Err("not available outside the browser".to_owned())
    }
}

/// Parse a free-text search into structured intent via
/// `POST /api/gemini/parse-query`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn parse_travel_query(user_query: &str) -> Result<ParsedQuery, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "userQuery": user_query });
        let resp = gloo_net::http::Request::post("/api/gemini/parse-query")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("parse-query request failed: {}", resp.status()));
        }
        resp.json::<ParsedQuery>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_query;
        Err("not available outside the browser".to_owned())
    }
}

// =============================================================================
// SEARCH
// =============================================================================

#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Place>,
}

/// Query the place search via `GET /api/qloo/search`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn search_places(
    types: &str,
    query: &str,
    popularity_min: f64,
    location: &str,
) -> Result<Vec<Place>, String> {
    #[cfg(feature = "csr")]
    {
        let popularity_min = popularity_min.to_string();
        let resp = gloo_net::http::Request::get("/api/qloo/search")
            .query([
                ("types", types),
                ("query", query),
                ("filter_popularity_min", popularity_min.as_str()),
                ("location", location),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("search request failed: {}", resp.status()));
        }
        let body: SearchResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.results)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (types, query, popularity_min, location);
        Err("not available outside the browser".to_owned())
    }
}

/// Full search pipeline: parse the free-text query, then search for places
/// near `location` with the parsed intent.
///
/// # Errors
///
/// Returns an error string when either stage fails.
pub async fn run_search(user_query: &str, location: &str) -> Result<Vec<Place>, String> {
    let parsed = parse_travel_query(user_query).await?;
    let types = search_entity_type(&parsed.kind);
    let query = format!("{} {location}", parsed.query);
    search_places(&types, &query, popularity_fraction(parsed.popularity), location).await
}

// =============================================================================
// GEOCODING
// =============================================================================

/// Resolve coordinates into a display location via
/// `GET /api/location/geocode`. Returns `None` on any failure; callers fall
/// back to raw coordinates.
pub async fn reverse_geocode(latitude: f64, longitude: f64) -> Option<GeocodedLocation> {
    #[cfg(feature = "csr")]
    {
        let url = geocode_endpoint(latitude, longitude);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<GeocodedLocation>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (latitude, longitude);
        None
    }
}
