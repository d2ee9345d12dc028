//! Health endpoint tests.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_check_needs_no_auth() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/does-not-exist", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
