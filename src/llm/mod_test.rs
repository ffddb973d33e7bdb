use super::*;

#[tokio::test]
async fn offline_client_always_disabled() {
    let client = LlmClient::offline();
    assert!(client.is_offline());
    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, LlmError::Disabled));
}

#[test]
fn from_config_honors_offline_flag() {
    let config = LlmConfig { offline: true, ..LlmConfig::default() };
    assert!(LlmClient::from_config(&config).unwrap().is_offline());
}

#[test]
fn from_config_builds_http_client_by_default() {
    let client = LlmClient::from_config(&LlmConfig::default()).unwrap();
    assert!(!client.is_offline());
}
