//! # Auth Gateway Tests
//!
//! Rejection behavior of the bearer-token middleware guarding the blog
//! routes, including the distinguishable misconfigured-server failure.

use super::*;
use lib_core::Config;

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    let response = send(&app, "GET", "/api/blogs", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "Unauthorized");
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/blogs")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_token_is_unauthorized() {
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());
    let auth = register_user(&app, "Ann", "ann@example.com", "secret123").await;

    // Corrupt the signature segment.
    let mut tampered = auth.token.clone();
    tampered.pop();
    tampered.push('x');

    let response = send(&app, "GET", "/api/blogs", Some(&tampered), None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "Unauthorized");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());
    register_user(&app, "Ann", "ann@example.com", "secret123").await;

    let foreign =
        lib_auth::encode_jwt(1, "another-secret-key-also-32-characters-long!!", 24).unwrap();

    let response = send(&app, "GET", "/api/blogs", Some(&foreign), None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_secret_fails_closed_as_misconfigured() {
    // A server whose signing secret is empty must reject every protected
    // request with a server error, not an unauthorized, so operators can
    // tell a broken deployment from a bad client token.
    let pool = setup_test_db().await;
    let config = Config {
        jwt_secret: String::new(),
        ..test_config()
    };
    let app = test_app(pool, config);

    let token = lib_auth::encode_jwt(1, "any-valid-secret-32-characters-long!!!!!", 24).unwrap();
    let response = send(&app, "GET", "/api/blogs", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["code"], "ServerMisconfigured");
}
