//! # Login Tests

use super::*;
use lib_auth::decode_jwt;

#[tokio::test]
async fn test_login_success() {
    // Arrange
    let pool = setup_test_db().await;
    let config = test_config();
    let app = test_app(pool, config.clone());
    let registered = register_user(&app, "Ann", "ann@example.com", "secret123").await;

    // Act
    let response = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ann@example.com", "password": "secret123" })),
    )
    .await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "ann@example.com");

    // The fresh token resolves to the same identity as the registration one.
    let token = body["token"].as_str().expect("token should be a string");
    let claims = decode_jwt(token, &config.jwt_secret).expect("token should verify");
    assert_eq!(claims.sub, registered.user.id);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    let response = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ann@example.com" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "MissingFields");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    let response = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "nobody@example.com", "password": "whatever" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "InvalidCredentials");
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());
    register_user(&app, "Ann", "ann@example.com", "secret123").await;

    let response = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ann@example.com", "password": "wrong-password" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "InvalidCredentials");
}

#[tokio::test]
async fn test_login_failure_is_symmetric() {
    // Unknown email and wrong password must be indistinguishable: same
    // status, same body.
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());
    register_user(&app, "Ann", "ann@example.com", "secret123").await;

    let unknown_email = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "nobody@example.com", "password": "whatever" })),
    )
    .await;

    let wrong_password = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ann@example.com", "password": "wrong-password" })),
    )
    .await;

    assert_eq!(unknown_email.status(), wrong_password.status());

    let unknown_body = body_json(unknown_email).await;
    let wrong_body = body_json(wrong_password).await;
    assert_eq!(unknown_body, wrong_body);
}
