//! Query-parser relay — free-text travel query → structured search params.
//!
//! Parsing failure is always recoverable: whatever the provider returns
//! (or fails to return), the caller gets a valid [`ParsedQuery`], degrading
//! to `{type: "attraction", query: <input>, popularity: 50}`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm::GenerateText;

pub const DEFAULT_TYPE: &str = "attraction";
pub const DEFAULT_POPULARITY: u8 = 50;

/// Structured search parameters extracted from a natural-language query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    #[serde(rename = "type")]
    pub kind: String,
    pub query: String,
    /// Always an integer in [1, 100].
    pub popularity: u8,
}

impl ParsedQuery {
    /// Degraded-but-valid result used on any parse or provider failure.
    #[must_use]
    pub fn degraded(user_query: &str) -> Self {
        Self { kind: DEFAULT_TYPE.into(), query: user_query.into(), popularity: DEFAULT_POPULARITY }
    }
}

// =============================================================================
// PROMPT
// =============================================================================

pub(crate) fn build_parse_prompt(user_query: &str) -> String {
    format!(
        "You are an AI assistant that converts natural language travel queries into structured parameters for the Qloo API.\n\n\
User query: \"{user_query}\"\n\n\
Please analyze this query and extract the following information in JSON format:\n\
{{\n\
  \"type\": \"string\",\n\
  \"query\": \"string\",\n\
  \"popularity\": \"number\"\n\
}}\n\n\
Examples:\n\
- \"Find famous Italian restaurants\" -> {{\"type\": \"restaurant\", \"query\": \"Italian\", \"popularity\": 80}}\n\
- \"Show me hidden local cafes\" -> {{\"type\": \"restaurant\", \"query\": \"cafe local\", \"popularity\": 20}}\n\
- \"Popular tourist attractions\" -> {{\"type\": \"attraction\", \"query\": \"tourist attractions\", \"popularity\": 85}}\n\n\
Respond ONLY with the JSON object, no additional text."
    )
}

// =============================================================================
// PARSING
// =============================================================================

/// Remove markdown code-fence markers the model sometimes wraps JSON in.
pub(crate) fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Clamp a provider popularity value into [1, 100]; missing or non-numeric
/// values default to 50.
pub(crate) fn clamp_popularity(value: Option<&serde_json::Value>) -> u8 {
    let raw = value
        .and_then(serde_json::Value::as_f64)
        .unwrap_or(f64::from(DEFAULT_POPULARITY));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        raw.clamp(1.0, 100.0).round() as u8
    }
}

/// Turn a raw provider reply into a [`ParsedQuery`], degrading on any
/// malformed or incomplete reply.
pub(crate) fn parse_provider_reply(user_query: &str, reply: &str) -> ParsedQuery {
    let cleaned = strip_code_fences(reply);
    let Ok(value) = serde_json::from_str::<serde_json::Value>(&cleaned) else {
        warn!("query: provider reply is not JSON, using degraded result");
        return ParsedQuery::degraded(user_query);
    };

    let field = |name: &str| {
        value
            .get(name)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    };

    match (field("type"), field("query")) {
        (Some(kind), Some(query)) => {
            ParsedQuery { kind, query, popularity: clamp_popularity(value.get("popularity")) }
        }
        _ => {
            warn!("query: provider reply missing type or query, using degraded result");
            ParsedQuery::degraded(user_query)
        }
    }
}

// =============================================================================
// SERVICE
// =============================================================================

/// Parse a user query via the provider; never fails once the provider is
/// configured.
pub async fn parse_query(llm: &Arc<dyn GenerateText>, user_query: &str) -> ParsedQuery {
    let prompt = build_parse_prompt(user_query);
    match llm.generate(&prompt).await {
        Ok(reply) => parse_provider_reply(user_query, &reply),
        Err(e) => {
            warn!(error = %e, "query: provider error, using degraded result");
            ParsedQuery::degraded(user_query)
        }
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
