mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _pdf) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
