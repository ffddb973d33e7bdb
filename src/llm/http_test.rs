use super::*;
use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};

async fn spawn_endpoint(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/chatgpt")
}

fn client_for(endpoint: String) -> HttpCompletionClient {
    let config = LlmConfig { endpoint, ..LlmConfig::default() };
    HttpCompletionClient::new(&config).unwrap()
}

async fn echo(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let text = params.get("text").cloned().unwrap_or_default();
    Json(json!({ "success": true, "result": { "prompt": format!("echo: {text}") } }))
}

// =============================================================================
// build_request_url
// =============================================================================

#[test]
fn request_url_percent_encodes_message() {
    let url = build_request_url("https://api.test/chat", "text", "what is AI? & why");
    assert_eq!(url, "https://api.test/chat?text=what%20is%20AI%3F%20%26%20why");
}

#[test]
fn request_url_appends_to_existing_query() {
    let url = build_request_url("https://api.test/chat?lang=en", "text", "hi");
    assert_eq!(url, "https://api.test/chat?lang=en&text=hi");
}

// =============================================================================
// complete — against a local endpoint
// =============================================================================

#[tokio::test]
async fn complete_returns_prompt_and_round_trips_encoding() {
    let endpoint = spawn_endpoint(Router::new().route("/api/chatgpt", get(echo))).await;
    let client = client_for(endpoint);

    let reply = client.complete("tell me about robots & the future?").await.unwrap();
    assert_eq!(reply, "echo: tell me about robots & the future?");
}

#[tokio::test]
async fn complete_maps_server_error_to_status() {
    let router = Router::new().route("/api/chatgpt", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));
    let client = client_for(spawn_endpoint(router).await);

    let err = client.complete("hello").await.unwrap_err();
    match err {
        LlmError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn complete_maps_missing_prompt_to_malformed() {
    let router =
        Router::new().route("/api/chatgpt", get(|| async { Json(json!({ "success": true, "result": {} })) }));
    let client = client_for(spawn_endpoint(router).await);

    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, LlmError::Malformed(_)));
}

#[tokio::test]
async fn complete_maps_unreachable_host_to_transport() {
    // Bind then drop so the port is (almost certainly) closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(format!("http://{addr}/api/chatgpt"));

    let err = client.complete("hello").await.unwrap_err();
    assert_eq!(err.kind(), "E_TRANSPORT");
}

#[tokio::test]
async fn complete_maps_not_found_to_status() {
    let endpoint = spawn_endpoint(Router::new().route("/other", get(echo))).await;
    let client = client_for(endpoint);

    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, LlmError::Status { status: 404, .. }));
}
