mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::{redirect_handler, shorten_handler};

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::seed_mapping(&store, "abc123", "https://example.com/target").await;

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/zzzzz9").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL not found");
}

#[tokio::test]
async fn test_redirect_rejects_malformed_code() {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    // Wrong length and foreign symbols both 404 without a store lookup.
    let response = server.get("/too-long-to-be-a-code").await;
    response.assert_status_not_found();

    let response = server.get("/ab_12!").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_after_shorten_round_trip() {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .add_header("Host", "s.test.com")
        .json(&json!({ "url": "example.com/some/page" }))
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let code = body["short_url"]
        .as_str()
        .unwrap()
        .rsplit('/')
        .next()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "http://example.com/some/page");
}
