//! # Health Handlers
//!
//! Unauthenticated status endpoints for load balancers and deploy checks.

use axum::{extract::State, Json};
use lib_core::DbPool;
use serde_json::{json, Value};

/// Root status endpoint.
pub async fn root() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Health endpoint reporting database connectivity.
pub async fn health(State(pool): State<DbPool>) -> Json<Value> {
    let db_connected = sqlx::query("SELECT 1").execute(&pool).await.is_ok();

    Json(json!({
        "status": "ok",
        "db_connected": db_connected,
    }))
}
