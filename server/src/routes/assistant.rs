//! Gemini relay routes — chat, greeting, and query parsing.
//!
//! The conversational routes always answer with a 200 once the provider is
//! configured: failures and timeouts are absorbed by the service layer's
//! canned fallbacks.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use crate::services::{assistant, query};
use crate::state::AppState;

fn missing_field(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn not_configured() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Gemini API Key not configured" }))).into_response()
}

// =============================================================================
// CHAT
// =============================================================================

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub location: Option<String>,
    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: Vec<assistant::ChatMessage>,
}

/// `POST /api/gemini/chat` — answer a travel question.
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatRequest>) -> Response {
    let Some(message) = body.message.filter(|m| !m.is_empty()) else {
        return missing_field("Message is required");
    };
    let Some(llm) = &state.llm else {
        return not_configured();
    };

    let response = assistant::chat(llm, &message, body.location.as_deref(), &body.conversation_history).await;
    Json(json!({ "response": response })).into_response()
}

// =============================================================================
// INIT CHAT
// =============================================================================

#[derive(Deserialize)]
pub struct InitChatRequest {
    pub location: Option<String>,
}

/// `POST /api/gemini/init-chat` — session-opening greeting for a location.
pub async fn init_chat(State(state): State<AppState>, Json(body): Json<InitChatRequest>) -> Response {
    let Some(location) = body.location.filter(|l| !l.is_empty()) else {
        return missing_field("Location is required");
    };
    let Some(llm) = &state.llm else {
        return not_configured();
    };

    let response = assistant::greeting(llm, &location).await;
    Json(json!({ "response": response })).into_response()
}

// =============================================================================
// PARSE QUERY
// =============================================================================

#[derive(Deserialize)]
pub struct ParseQueryRequest {
    #[serde(rename = "userQuery")]
    pub user_query: Option<String>,
}

/// `POST /api/gemini/parse-query` — free text to `{type, query, popularity}`.
pub async fn parse_query(State(state): State<AppState>, Json(body): Json<ParseQueryRequest>) -> Response {
    let Some(user_query) = body.user_query.filter(|q| !q.is_empty()) else {
        return missing_field("User query is required");
    };
    let Some(llm) = &state.llm else {
        return not_configured();
    };

    let parsed = query::parse_query(llm, &user_query).await;
    Json(parsed).into_response()
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
