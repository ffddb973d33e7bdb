use super::*;

// =============================================================================
// LlmError::kind
// =============================================================================

#[test]
fn kind_config_parse() {
    assert_eq!(LlmError::ConfigParse("bad".into()).kind(), "E_CONFIG_PARSE");
}

#[test]
fn kind_transport() {
    assert_eq!(LlmError::Transport("refused".into()).kind(), "E_TRANSPORT");
}

#[test]
fn kind_status() {
    let err = LlmError::Status { status: 502, body: "bad gateway".into() };
    assert_eq!(err.kind(), "E_STATUS");
    assert!(err.to_string().contains("502"));
}

#[test]
fn kind_malformed() {
    assert_eq!(LlmError::Malformed("json".into()).kind(), "E_MALFORMED");
}

#[test]
fn kind_http_client_build() {
    assert_eq!(LlmError::HttpClientBuild("tls".into()).kind(), "E_HTTP_CLIENT_BUILD");
}

#[test]
fn kind_disabled() {
    assert_eq!(LlmError::Disabled.kind(), "E_DISABLED");
}

// =============================================================================
// parse_completion_body
// =============================================================================

#[test]
fn parse_accepts_well_formed_body() {
    let body = r#"{"success":true,"result":{"prompt":"Neural nets are neat."}}"#;
    assert_eq!(parse_completion_body(body).unwrap(), "Neural nets are neat.");
}

#[test]
fn parse_ignores_unknown_fields() {
    let body = r#"{"success":true,"creator":"x","result":{"prompt":"ok","model":"gpt"}}"#;
    assert_eq!(parse_completion_body(body).unwrap(), "ok");
}

#[test]
fn parse_rejects_missing_prompt() {
    let err = parse_completion_body(r#"{"success":true,"result":{}}"#).unwrap_err();
    assert!(matches!(err, LlmError::Malformed(_)));
}

#[test]
fn parse_rejects_empty_prompt() {
    let err = parse_completion_body(r#"{"success":true,"result":{"prompt":""}}"#).unwrap_err();
    assert!(matches!(err, LlmError::Malformed(_)));
}

#[test]
fn parse_rejects_false_success() {
    let err = parse_completion_body(r#"{"success":false,"result":{"prompt":"hi"}}"#).unwrap_err();
    assert!(err.to_string().contains("success flag"));
}

#[test]
fn parse_rejects_missing_success() {
    let err = parse_completion_body(r#"{"result":{"prompt":"hi"}}"#).unwrap_err();
    assert!(matches!(err, LlmError::Malformed(_)));
}

#[test]
fn parse_rejects_null_result() {
    let err = parse_completion_body(r#"{"success":true,"result":null}"#).unwrap_err();
    assert!(err.to_string().contains("result.prompt"));
}

#[test]
fn parse_rejects_non_string_prompt() {
    let err = parse_completion_body(r#"{"success":true,"result":{"prompt":42}}"#).unwrap_err();
    assert!(matches!(err, LlmError::Malformed(_)));
}

#[test]
fn parse_rejects_non_json() {
    let err = parse_completion_body("<html>502</html>").unwrap_err();
    assert_eq!(err.kind(), "E_MALFORMED");
}
