mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::llm::GenerateText;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the Gemini client (non-fatal: chat, greeting, and query
    // parsing report "not configured" when the key is missing).
    let llm: Option<Arc<dyn GenerateText>> = match llm::GeminiClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "Gemini client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Gemini client not configured — assistant features disabled");
            None
        }
    };

    // Same policy for the taste-API client.
    let search = match services::search::SearchClient::from_env() {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!(error = %e, "Qloo client not configured — place search disabled");
            None
        }
    };

    let geocode = services::geocode::GeocodeClient::from_env().expect("geocode client build failed");

    let state = state::AppState::new(llm, search, geocode);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "touristbuddy listening");
    axum::serve(listener, app).await.expect("server failed");
}
