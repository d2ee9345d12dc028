//! Authentication gating tests.
//!
//! Token forging uses the same secret as the test config, so signature
//! checks pass and the specific rejection under test is exercised.

use chrono::Utc;
use http::StatusCode;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

use crate::helpers::TestApp;

/// Claims shape mirroring the tokens the server issues.
fn forged_token(app: &TestApp, exp_offset_secs: i64, token_type: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = json!({
        "sub": uuid::Uuid::new_v4(),
        "role": "engineer",
        "iat": now,
        "exp": now + exp_offset_secs,
        "token_type": token_type,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(app.config.auth.jwt_secret.as_bytes()),
    )
    .expect("Failed to forge token")
}

#[tokio::test]
async fn test_missing_auth_header_is_unauthorized() {
    let app = TestApp::new();

    for path in ["/api/requests", "/api/notifications", "/api/audit"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "path {path}");
        assert_eq!(response.body["error"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_malformed_bearer_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/requests", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new();
    let token = forged_token(&app, -3600, "access");

    let response = app
        .request("GET", "/api/requests", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_rejected_on_api_routes() {
    let app = TestApp::new();
    let token = forged_token(&app, 3600, "refresh");

    let response = app
        .request("GET", "/api/requests", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
