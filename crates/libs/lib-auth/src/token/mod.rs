//! # JWT Token Management
//!
//! JWT token generation and validation.
//!
//! Tokens are stateless HS256 envelopes carrying a single identity claim.
//! The signing secret is injected by the caller; an empty secret is refused
//! outright so the codec never signs or verifies with a default key.

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use lib_utils::time::now_utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims carried by an identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Errors from token encoding and decoding.
///
/// `MissingSecret` is kept distinct from `Invalid` so callers can surface a
/// server misconfiguration separately from a bad client token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing secret is not configured")]
    MissingSecret,

    #[error("failed to encode token: {0}")]
    Encode(String),

    #[error("invalid or expired token")]
    Invalid,
}

/// Encode a JWT for the given user id, valid for `expiration_hours`.
pub fn encode_jwt(user_id: i64, secret: &str, expiration_hours: i64) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let now = now_utc();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Encode(e.to_string()))
}

/// Decode and validate a JWT, returning its claims.
///
/// Fails with [`TokenError::Invalid`] when the signature does not match, the
/// payload cannot be decoded, or the token has expired.
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| TokenError::Invalid)?;

    Ok(token_data.claims)
}
