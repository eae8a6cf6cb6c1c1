//! Integration tests for portal session handling at the HTTP boundary.
//!
//! Everything here exercises the credential extractor and validator
//! failure paths, which reject before any store access.

use http::StatusCode;
use serde_json::json;

use super::helpers::TestApp;

#[tokio::test]
async fn test_profile_without_cookie_is_401_not_404() {
    let app = TestApp::new();

    for path in ["/api/parent/profile", "/api/account/profile"] {
        let response = app.request("GET", path, None, None).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "path {path}");
        assert_eq!(response.body.get("error").unwrap(), "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_profile_with_malformed_cookie_is_401() {
    let app = TestApp::new();

    for cookie in [
        "parent_session=garbage",
        "parent_session={}",
        r#"parent_session={"token":"t1"}"#,
        r#"parent_session={"token":"t1","parentId":"nope","clubId":"nope"}"#,
    ] {
        let response = app
            .request("GET", "/api/parent/profile", None, Some(cookie))
            .await;

        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "cookie {cookie}"
        );
    }
}

#[tokio::test]
async fn test_parent_cookie_shape_is_not_accepted_for_member_sessions() {
    let app = TestApp::new();

    // A parent-shaped payload under the member cookie name is missing
    // the accountId field, so the member extractor treats it as absent.
    let cookie = format!(
        r#"member_session={{"token":"t1","parentId":"{}","clubId":"{}"}}"#,
        uuid::Uuid::new_v4(),
        uuid::Uuid::new_v4()
    );

    let response = app
        .request("GET", "/api/account/profile", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update_without_session_is_401() {
    let app = TestApp::new();

    let response = app
        .request(
            "PATCH",
            "/api/parent/profile",
            Some(json!({ "phone": "555-0100" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_password_change_without_session_is_401() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/parent/password",
            Some(json!({
                "current_password": "old",
                "new_password": "new-and-long-enough",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_with_invalid_email_is_400() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/parent/login",
            Some(json!({
                "club_id": uuid::Uuid::new_v4(),
                "email": "not-an-email",
                "password": "whatever",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body.get("error").unwrap(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_logout_without_session_is_401() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/account/logout", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
