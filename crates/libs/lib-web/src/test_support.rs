//! Shared fixtures for handler tests: in-memory database, injectable
//! configuration, and request plumbing against the real router.

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use lib_core::dto::AuthResponse;
use lib_core::{Config, DbPool};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use crate::server::{router, AppState};

/// Setup an in-memory test database with the application schema.
pub async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create users table");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            image_url TEXT,
            author_id INTEGER NOT NULL REFERENCES users(id),
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create posts table");

    pool
}

/// Create a test config with a per-test secret.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
        jwt_expiration_hours: 24,
    }
}

/// Build the real application router over test state.
pub fn test_app(pool: DbPool, config: Config) -> Router {
    router(AppState { db: pool, config })
}

/// Build a request with optional bearer token and optional JSON body.
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    }
}

/// Send a request through a clone of the app and return the response.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    app.clone()
        .oneshot(json_request(method, uri, token, body))
        .await
        .expect("request should not fail at the transport level")
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Register a user through the API and return the auth response.
pub async fn register_user(app: &Router, name: &str, email: &str, password: &str) -> AuthResponse {
    let response = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await;

    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let body = body_json(response).await;
    serde_json::from_value(body).expect("auth response should deserialize")
}
