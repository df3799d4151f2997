//! # Request/Response Logging Middleware
//!
//! Structured logging for HTTP requests and responses: method, path, status,
//! duration, correlated by request ID. Credential-bearing headers are
//! redacted, and bodies of authentication endpoints are never logged.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Headers whose values must not appear in logs.
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "x-api-key"];

/// Endpoints whose request bodies carry credentials.
const SENSITIVE_ENDPOINTS: &[&str] = &["/api/auth/register", "/api/auth/login"];

/// Request/response logging middleware.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|q| q.to_string());

    let request_id = req
        .extensions()
        .get::<crate::middleware::mw_req_stamp::RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let is_sensitive = SENSITIVE_ENDPOINTS.iter().any(|ep| path.starts_with(ep));

    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            if SENSITIVE_HEADERS.iter().any(|h| name_lower.contains(h)) {
                Some((name.to_string(), "***REDACTED***".to_string()))
            } else {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            }
        })
        .collect();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = ?query,
        sensitive = is_sensitive,
        "[REQUEST] {} {}",
        method,
        path
    );

    debug!(
        request_id = %request_id,
        headers = ?headers,
        "[REQUEST HEADERS]"
    );

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = duration.as_millis() as u64,
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = duration.as_millis() as u64,
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = duration.as_millis() as u64,
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    }

    response
}
