//! Reverse-geocoding route.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use crate::services::geocode::compose_location;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GeocodeQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// `GET /api/location/geocode?latitude=&longitude=` — coordinates to a
/// display location.
pub async fn geocode(State(state): State<AppState>, Query(params): Query<GeocodeQuery>) -> Response {
    let latitude = params.latitude.filter(|v| !v.is_empty());
    let longitude = params.longitude.filter(|v| !v.is_empty());
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Missing latitude or longitude" }))).into_response();
    };

    let data = match state.geocode.reverse(&latitude, &longitude).await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, %latitude, %longitude, "geocode: upstream failure");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Error fetching location data from Nominatim",
                    "details": e.to_string(),
                })),
            )
                .into_response();
        }
    };

    let empty = json!({});
    let address = data.get("address").unwrap_or(&empty);

    match compose_location(address) {
        Some(resolved) => Json(json!({
            "city": resolved.city,
            "fullLocation": resolved.full_location,
            "address": address,
        }))
        .into_response(),
        None => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": "City not found for the given coordinates" })))
                .into_response()
        }
    }
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
