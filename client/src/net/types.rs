//! Wire types shared with the relay server.

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `/api/auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// One turn of the chat transcript. Also sent back to the server as
/// conversation context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_owned(), content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".to_owned(), content: content.into() }
    }
}

/// Structured search intent from `/api/gemini/parse-query`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedQuery {
    #[serde(rename = "type")]
    pub kind: String,
    pub query: String,
    pub popularity: u8,
}

/// Resolved place name from `/api/location/geocode`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, rename = "fullLocation")]
    pub full_location: Option<String>,
}

/// One place entry from `/api/qloo/search` results.
///
/// The taste API's entity shape varies by type; every field is optional and
/// the card renderer degrades per field.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Place {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub location: Option<PlaceLocation>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PlaceLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
