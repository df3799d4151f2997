//! # Authentication Middleware
//!
//! Axum middleware gating access to protected routes.
//!
//! The middleware extracts the `Authorization: Bearer <token>` header,
//! validates the JWT against the secret carried in the injected application
//! state, and inserts a [`CurrentUser`] into the request extensions for
//! downstream handlers. The secret comes from state rather than any ambient
//! global so tests can run scenarios with distinct secrets.
//!
//! Handlers extract the authenticated identity with `Extension<CurrentUser>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_web::middleware::CurrentUser;
//!
//! async fn protected_handler(Extension(current): Extension<CurrentUser>) -> String {
//!     format!("Hello, user {}!", current.user_id)
//! }
//! ```

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::{decode_jwt, TokenError};
use lib_core::AppError;
use tracing::{debug, warn};

use crate::server::AppState;

/// The authenticated identity attached to a request by [`require_auth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
}

/// Authentication middleware that validates bearer tokens.
///
/// # Behavior
///
/// - **Valid token**: continues to the handler with [`CurrentUser`] in
///   request extensions.
/// - **Missing header / wrong scheme / invalid or expired token**: rejects
///   with 401 Unauthorized.
/// - **Unconfigured signing secret**: rejects with 500, reported as a
///   distinct `ServerMisconfigured` error code.
///
/// Stateless; each request's token is verified exactly once, with no caching
/// of verification results.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] Missing Authorization header");
            AppError::Unauthorized("missing Authorization header".to_string())
        })?;

    // Extract Bearer token
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] Invalid Authorization header format");
        AppError::Unauthorized("Authorization header is not a bearer token".to_string())
    })?;

    // Decode and validate JWT against the injected secret
    let claims = decode_jwt(token, &state.config.jwt_secret).map_err(|e| match e {
        TokenError::MissingSecret => {
            AppError::ServerMisconfigured("token signing secret is not configured".to_string())
        }
        _ => {
            warn!("[AUTH] Token validation failed");
            AppError::Unauthorized("invalid or expired token".to_string())
        }
    })?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::Unauthorized("invalid token subject".to_string()))?;

    debug!("[AUTH] Authenticated user id: {}", user_id);

    // Inject the identity into request extensions
    req.extensions_mut().insert(CurrentUser { user_id });

    // Continue to next middleware/handler
    Ok(next.run(req).await)
}
