//! Place-search route — relays the taste API verbatim.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::services::search::SearchParams;
use crate::state::AppState;

/// `GET /api/qloo/search` — forward the query string upstream and relay the
/// provider's status and body untouched.
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let Some(client) = &state.search else {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Qloo API Key not configured" })))
            .into_response();
    };

    match client.search(&params).await {
        Ok((status, body)) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "search: upstream failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Error fetching data from Qloo API",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
