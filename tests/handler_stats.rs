mod common;

use chrono::{Duration, Utc};
use serde_json::json;

#[tokio::test]
async fn test_stats_success() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "abc123", "https://example.com", None).await;

    let response = server.get("/stats/abc123").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["short_code"], "abc123");
    assert_eq!(json["clicks"], 0);
    assert!(json["created_at"].as_str().unwrap().ends_with('Z'));
    assert!(json["expires_at"].is_null());
}

#[tokio::test]
async fn test_stats_renders_expiry() {
    let (server, _repo) = common::create_test_server();

    server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com",
            "short_code": "later1",
            "expires_at": "2099-01-01T00:00"
        }))
        .await
        .assert_status_ok();

    let json = server
        .get("/stats/later1")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["expires_at"], "2099-01-01T00:00:00");
}

#[tokio::test]
async fn test_stats_for_expired_link() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(
        &repo,
        "old123",
        "https://example.com",
        Some(Utc::now() - Duration::days(1)),
    )
    .await;

    let response = server.get("/stats/old123").await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["expires_at"].is_string());
}

#[tokio::test]
async fn test_stats_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/stats/nonexistent").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Short URL not found"
    );
}
