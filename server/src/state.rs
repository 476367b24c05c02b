//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Every field is an external-provider client or the in-memory session
//! store; no request leaves state behind beyond its session entry.

use std::sync::Arc;

use crate::llm::GenerateText;
use crate::services::geocode::GeocodeClient;
use crate::services::search::SearchClient;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Generative-language client. `None` if `GEMINI_API_KEY` is not set.
    pub llm: Option<Arc<dyn GenerateText>>,
    /// Taste-API search client. `None` if `QLOO_API_KEY` is not set.
    pub search: Option<SearchClient>,
    /// Reverse-geocoding client (no credentials required).
    pub geocode: GeocodeClient,
    /// In-memory session store for the demo login.
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn GenerateText>>, search: Option<SearchClient>, geocode: GeocodeClient) -> Self {
        Self { llm, search, geocode, sessions: SessionStore::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` with no providers configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let geocode = GeocodeClient::new("http://localhost:0".into()).expect("geocode client build");
        AppState::new(None, None, geocode)
    }

    /// Create a test `AppState` with a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn GenerateText>) -> AppState {
        let geocode = GeocodeClient::new("http://localhost:0".into()).expect("geocode client build");
        AppState::new(Some(llm), None, geocode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_has_no_providers() {
        let state = test_helpers::test_app_state();
        assert!(state.llm.is_none());
        assert!(state.search.is_none());
    }
}
