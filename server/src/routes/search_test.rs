use super::*;
use axum::body::to_bytes;
use axum::response::Response;
use crate::state::test_helpers::test_app_state;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn search_without_provider_is_not_configured() {
    let state = test_app_state();

    let response = search(State(state), Query(SearchParams::default())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Qloo API Key not configured");
}

#[tokio::test]
async fn search_reports_transport_failure() {
    let client = crate::services::search::SearchClient::new("key".into(), "http://localhost:0".into())
        .expect("client build");
    let mut state = test_app_state();
    state.search = Some(client);

    let response = search(State(state), Query(SearchParams::default())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Error fetching data from Qloo API");
    assert!(body["details"].is_string());
}
