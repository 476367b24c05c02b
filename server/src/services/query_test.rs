use super::*;
use crate::llm::LlmError;
use serde_json::json;

// =========================================================================
// strip_code_fences
// =========================================================================

#[test]
fn strips_json_fences() {
    assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
}

#[test]
fn strips_bare_fences() {
    assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
}

#[test]
fn leaves_plain_text_alone() {
    assert_eq!(strip_code_fences("  {\"a\":1} "), "{\"a\":1}");
}

// =========================================================================
// clamp_popularity
// =========================================================================

#[test]
fn popularity_missing_defaults_to_50() {
    assert_eq!(clamp_popularity(None), 50);
}

#[test]
fn popularity_non_numeric_defaults_to_50() {
    assert_eq!(clamp_popularity(Some(&json!("very"))), 50);
}

#[test]
fn popularity_clamps_low_and_high() {
    assert_eq!(clamp_popularity(Some(&json!(0))), 1);
    assert_eq!(clamp_popularity(Some(&json!(-5))), 1);
    assert_eq!(clamp_popularity(Some(&json!(250))), 100);
}

#[test]
fn popularity_in_range_passes_through() {
    assert_eq!(clamp_popularity(Some(&json!(80))), 80);
    assert_eq!(clamp_popularity(Some(&json!(80.6))), 81);
}

// =========================================================================
// parse_provider_reply
// =========================================================================

#[test]
fn parses_well_formed_reply() {
    let reply = r#"{"type": "restaurant", "query": "Italian", "popularity": 80}"#;
    let parsed = parse_provider_reply("Find famous Italian restaurants", reply);
    assert_eq!(
        parsed,
        ParsedQuery { kind: "restaurant".into(), query: "Italian".into(), popularity: 80 }
    );
}

#[test]
fn parses_fenced_reply() {
    let reply = "```json\n{\"type\": \"attraction\", \"query\": \"museums\", \"popularity\": 30}\n```";
    let parsed = parse_provider_reply("museums", reply);
    assert_eq!(parsed.kind, "attraction");
    assert_eq!(parsed.popularity, 30);
}

#[test]
fn non_json_reply_degrades() {
    let parsed = parse_provider_reply("hidden cafes", "I think you want cafes!");
    assert_eq!(parsed, ParsedQuery::degraded("hidden cafes"));
}

#[test]
fn missing_type_degrades() {
    let parsed = parse_provider_reply("q", r#"{"query": "cafes", "popularity": 10}"#);
    assert_eq!(parsed, ParsedQuery::degraded("q"));
}

#[test]
fn missing_query_degrades() {
    let parsed = parse_provider_reply("q", r#"{"type": "restaurant"}"#);
    assert_eq!(parsed, ParsedQuery::degraded("q"));
}

#[test]
fn empty_fields_degrade() {
    let parsed = parse_provider_reply("q", r#"{"type": "", "query": "cafes"}"#);
    assert_eq!(parsed, ParsedQuery::degraded("q"));
}

#[test]
fn missing_popularity_defaults() {
    let parsed = parse_provider_reply("q", r#"{"type": "restaurant", "query": "cafes"}"#);
    assert_eq!(parsed.popularity, DEFAULT_POPULARITY);
}

#[test]
fn degraded_shape_echoes_input() {
    let parsed = ParsedQuery::degraded("rooftop bars");
    assert_eq!(parsed.kind, "attraction");
    assert_eq!(parsed.query, "rooftop bars");
    assert_eq!(parsed.popularity, 50);
}

#[test]
fn wire_field_is_named_type() {
    let parsed = ParsedQuery::degraded("x");
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("attraction"));
    assert!(json.get("kind").is_none());
}

// =========================================================================
// parse_query service
// =========================================================================

struct ReplyLlm(&'static str);

#[async_trait::async_trait]
impl crate::llm::GenerateText for ReplyLlm {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.0.to_string())
    }
}

struct FailingLlm;

#[async_trait::async_trait]
impl crate::llm::GenerateText for FailingLlm {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::ApiResponse { status: 503, body: "overloaded".into() })
    }
}

#[tokio::test]
async fn service_returns_parsed_params() {
    let llm: Arc<dyn crate::llm::GenerateText> =
        Arc::new(ReplyLlm(r#"{"type": "restaurant", "query": "street food", "popularity": 95}"#));
    let parsed = parse_query(&llm, "authentic street food spots").await;
    assert_eq!(parsed.kind, "restaurant");
    assert_eq!(parsed.query, "street food");
    assert_eq!(parsed.popularity, 95);
}

#[tokio::test]
async fn service_degrades_on_provider_error() {
    let llm: Arc<dyn crate::llm::GenerateText> = Arc::new(FailingLlm);
    let parsed = parse_query(&llm, "art galleries").await;
    assert_eq!(parsed, ParsedQuery::degraded("art galleries"));
}

#[test]
fn prompt_embeds_user_query() {
    let prompt = build_parse_prompt("rooftop bars");
    assert!(prompt.contains("User query: \"rooftop bars\""));
    assert!(prompt.contains("Respond ONLY with the JSON object"));
}
