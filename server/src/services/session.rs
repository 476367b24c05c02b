//! Session management for the demo login.
//!
//! ARCHITECTURE
//! ============
//! The original gate was a client-side "isLoggedIn" flag in browser
//! storage; here the boundary is server-issued: login verifies the demo
//! credential pair and mints a random token that an HttpOnly cookie carries
//! back on every request. Sessions live in memory only — there is no user
//! database and nothing to persist.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Demo credential pair accepted by the login gate.
pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "abc123";

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Check a submitted credential pair against the demo literals.
#[must_use]
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

/// User attached to a validated session.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
}

// =============================================================================
// STORE
// =============================================================================

/// In-memory session store keyed by token.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionUser>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for the given username, returning the token.
    pub async fn create(&self, username: &str) -> String {
        let token = generate_token();
        let user = SessionUser { id: Uuid::new_v4(), username: username.to_string() };
        self.inner.write().await.insert(token.clone(), user);
        token
    }

    /// Validate a session token and return the associated user.
    pub async fn validate(&self, token: &str) -> Option<SessionUser> {
        self.inner.read().await.get(token).cloned()
    }

    /// Delete a session by token.
    pub async fn delete(&self, token: &str) {
        self.inner.write().await.remove(token);
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
