//! Integration test for the health endpoint.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_health_reports_connected_database() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert!(response.body["version"].is_string());
}
