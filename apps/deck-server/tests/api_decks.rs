//! Deck API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;

/// Test health check responds.
#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

/// Test listing decks returns the catalog in order.
#[tokio::test]
async fn test_list_decks() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/decks").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let ids: Vec<&str> = body["decks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["rust", "broken", "ghost"]);
    assert_eq!(body["decks"][0]["description"], "Basics");
    assert!(body["decks"][1].get("description").is_none());
}

/// Test parsed cards with the truncated row reported as skipped.
#[tokio::test]
async fn test_deck_cards() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/decks/rust/cards").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["deck"]["id"], "rust");

    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["id"], "1");
    assert_eq!(cards[0]["afirmacao"], "Statement 1.");
    assert_eq!(cards[0]["resposta"], "V");
    assert_eq!(cards[1]["resposta"], "F");
    assert_eq!(cards[2]["explicacao"], "Explanation 3.");

    let skipped = body["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["row"], 5);
}

/// Test unknown deck id returns 404.
#[tokio::test]
async fn test_deck_cards_unknown_deck() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/decks/python/cards").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
}

/// Test catalog entry whose file is missing returns 404.
#[tokio::test]
async fn test_deck_cards_missing_file() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/decks/ghost/cards").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

/// Test deck without a table returns a parse error.
#[tokio::test]
async fn test_deck_cards_without_table() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/decks/broken/cards").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "parse_error");
    assert_eq!(
        body["message"],
        "Parse error: no table found in the markdown document"
    );
}

/// Test raw deck files are served under /decks.
#[tokio::test]
async fn test_static_deck_file() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/decks/rust.md").await;

    response.assert_status_ok();
    assert!(response.text().starts_with(&fixtures::sample_deck(3)));
}

/// Test missing static files return 404.
#[tokio::test]
async fn test_static_deck_file_missing() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/decks/missing.md").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
