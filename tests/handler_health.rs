mod common;

use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(common::api_router(common::create_test_state())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["user_store"]["status"], "ok");
    assert_eq!(json["checks"]["token_signing"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = TestServer::new(common::api_router(common::create_test_state())).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("user_store").is_some());
    assert!(json["checks"].get("token_signing").is_some());
}
