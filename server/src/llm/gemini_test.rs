use super::*;

#[test]
fn parse_response_extracts_first_candidate_text() {
    let json = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "Hello from Indore!"}], "role": "model"},
             "finishReason": "STOP"}
        ],
        "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5}
    }"#;
    assert_eq!(parse_response(json).unwrap(), "Hello from Indore!");
}

#[test]
fn parse_response_joins_multiple_parts() {
    let json = r#"{"candidates": [{"content": {"parts": [{"text": "a"}, {"text": "b"}]}}]}"#;
    assert_eq!(parse_response(json).unwrap(), "ab");
}

#[test]
fn parse_response_ignores_later_candidates() {
    let json = r#"{"candidates": [
        {"content": {"parts": [{"text": "first"}]}},
        {"content": {"parts": [{"text": "second"}]}}
    ]}"#;
    assert_eq!(parse_response(json).unwrap(), "first");
}

#[test]
fn parse_response_no_candidates_errors() {
    let err = parse_response(r#"{"candidates": []}"#).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_response_missing_candidates_field_errors() {
    let err = parse_response("{}").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_response_empty_parts_errors() {
    let err = parse_response(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_response_malformed_json_errors() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}
