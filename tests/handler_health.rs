mod common;

use std::sync::Arc;

#[tokio::test]
async fn test_health_ok() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_store_unreachable() {
    let server = common::server_with(Arc::new(common::UnreachableRepository));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}
