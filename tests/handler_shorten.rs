mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shortkey::config::ResponseMode;
use shortkey::handlers::shorten_handler;

fn test_server(mode: ResponseMode) -> TestServer {
    let state = common::create_test_state(mode);
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_returns_key() {
    let server = test_server(ResponseMode::Key);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let key = json["shortKey"].as_str().unwrap();
    assert!(common::is_short_key(key), "unexpected key shape: {key}");
    assert!(json.get("shortUrl").is_none());
}

#[tokio::test]
async fn test_shorten_returns_full_url() {
    let server = test_server(ResponseMode::FullUrl);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let short_url = json["shortUrl"].as_str().unwrap();

    let key = short_url
        .strip_prefix(&format!("{}/", common::TEST_BASE_URL))
        .unwrap();
    assert!(common::is_short_key(key));
    assert!(json.get("shortKey").is_none());
}

#[tokio::test]
async fn test_shorten_same_url_twice_yields_distinct_keys() {
    let server = test_server(ResponseMode::Key);

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://openai.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://openai.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["shortKey"], second["shortKey"]);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = test_server(ResponseMode::Key);

    let response = server.post("/shorten").json(&json!({ "url": "" })).await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not provided");
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = test_server(ResponseMode::Key);

    let response = server.post("/shorten").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not provided");
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let server = test_server(ResponseMode::Key);

    let response = server
        .post("/shorten")
        .text("not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not provided");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = test_server(ResponseMode::Key);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not a url" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Invalid URL format");
}

#[tokio::test]
async fn test_shorten_rejects_missing_scheme() {
    let server = test_server(ResponseMode::Key);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "www.example.com/path" }))
        .await;

    assert_eq!(response.status_code(), 400);
}
