//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the relay API routes and serves the built client as static files
//! under a single Axum router. Every `/api` route is JSON in/out; the
//! static fallback rewrites unknown paths to `index.html` so client-side
//! routes deep-link.

pub mod assistant;
pub mod auth;
pub mod location;
pub mod search;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/location/geocode", get(location::geocode))
        .route("/api/gemini/chat", post(assistant::chat))
        .route("/api/gemini/init-chat", post(assistant::init_chat))
        .route("/api/gemini/parse-query", post(assistant::parse_query))
        .route("/api/qloo/search", get(search::search))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the path to the built client bundle.
fn client_dist_dir() -> PathBuf {
    std::env::var("CLIENT_DIST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// API routes + client bundle served as static files at `/`.
pub fn app(state: AppState) -> Router {
    let dist = client_dist_dir();
    let index = ServeFile::new(dist.join("index.html"));
    let client_service = ServeDir::new(&dist)
        .append_index_html_on_directories(true)
        .fallback(index);

    api_routes(state)
        .fallback_service(client_service)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
