//! # Blog Handler Tests
//!
//! Test suite for post CRUD, the ownership policy, and the auth gateway,
//! driven through the real router with an in-memory database.

mod gateway;
mod read;

use crate::test_support::*;
use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};

/// Create a post through the API and return its response body.
pub async fn create_post(app: &Router, token: &str, title: &str, content: &str) -> Value {
    let response = send(
        app,
        "POST",
        "/api/blogs",
        Some(token),
        Some(json!({ "title": title, "content": content })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
