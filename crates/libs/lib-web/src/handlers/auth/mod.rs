//! # Authentication Handlers
//!
//! HTTP request handlers for user registration and login.
//!
//! Both endpoints issue a JWT on success and return the user's public
//! fields; the stored password hash never leaves the database layer.
//!
//! Login deliberately collapses "unknown email" and "wrong password" into a
//! single `InvalidCredentials` failure so the endpoint cannot be used to
//! enumerate registered emails.

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use lib_auth::{encode_jwt, hash_password, verify_password, TokenError};
use lib_core::{
    dto::{AuthResponse, LoginRequest, RegisterRequest, UserInfo},
    model::store::models::UserForCreate,
    model::store::UserRepository,
    AppError, Config, DbPool,
};
use lib_utils::validation::validate_not_empty;
use tracing::{debug, info, instrument, warn};

fn token_issue_error(e: TokenError) -> AppError {
    match e {
        TokenError::MissingSecret => {
            AppError::ServerMisconfigured("token signing secret is not configured".to_string())
        }
        e => AppError::Internal(format!("token issuance failed: {e}")),
    }
}

fn public_user(id: i64, name: String, email: String) -> UserInfo {
    UserInfo {
        id: id.to_string(),
        name,
        email,
    }
}

/// Registration handler - creates a new user account.
///
/// # Returns
///
/// * `201` with token and public user fields on success
/// * `400 MissingFields` when name, email, or password is absent/empty
/// * `409 EmailTaken` when the email is already registered
/// * `500` on store or hashing failure
///
/// The existence check before insert is best-effort only; the `UNIQUE`
/// constraint on `users.email` is the authoritative duplicate signal, so a
/// concurrent registration that slips past the check still surfaces as
/// `EmailTaken`.
#[instrument(skip_all, fields(email = %req.email))]
pub async fn register(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    info!("[REGISTER] New registration request");

    if validate_not_empty(&req.name, "name").is_err()
        || validate_not_empty(&req.email, "email").is_err()
        || validate_not_empty(&req.password, "password").is_err()
    {
        warn!("[REGISTER] Missing fields");
        return Err(AppError::MissingFields(
            "name, email and password are required".to_string(),
        ));
    }

    if UserRepository::find_by_email(&pool, &req.email)
        .await?
        .is_some()
    {
        warn!("[REGISTER] Email already registered");
        return Err(AppError::EmailTaken);
    }

    debug!("[REGISTER] Hashing password...");
    let password_hash = hash_password(&req.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    debug!("[REGISTER] Creating user...");
    let user_data = UserForCreate::new(req.name, req.email, password_hash);
    let user = match UserRepository::create(&pool, user_data).await {
        Ok(user) => user,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            // A concurrent registration won the race; the constraint decides.
            warn!("[REGISTER] Duplicate email rejected by unique constraint");
            return Err(AppError::EmailTaken);
        }
        Err(e) => return Err(e.into()),
    };

    let token = encode_jwt(user.id, &config.jwt_secret, config.jwt_expiration_hours)
        .map_err(token_issue_error)?;

    info!("[REGISTER] User {} created", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: public_user(user.id, user.name, user.email),
        }),
    ))
}

/// Login handler - authenticates an existing user.
///
/// # Returns
///
/// * `200` with a fresh token and public user fields on success
/// * `400 MissingFields` when email or password is absent/empty
/// * `401 InvalidCredentials` for unknown email *or* wrong password; the
///   two cases are indistinguishable by design
/// * `500` on store or verification infrastructure failure
#[instrument(skip_all, fields(email = %req.email))]
pub async fn login(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    info!("[LOGIN] Login attempt");

    if validate_not_empty(&req.email, "email").is_err()
        || validate_not_empty(&req.password, "password").is_err()
    {
        warn!("[LOGIN] Missing fields");
        return Err(AppError::MissingFields(
            "email and password are required".to_string(),
        ));
    }

    let user = UserRepository::find_by_email(&pool, &req.email)
        .await?
        .ok_or_else(|| {
            warn!("[LOGIN] Unknown email");
            AppError::InvalidCredentials
        })?;

    debug!("[LOGIN] Verifying password...");
    let is_valid = verify_password(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("password verification failed: {e}")))?;

    if !is_valid {
        warn!("[LOGIN] Invalid password for user {}", user.id);
        return Err(AppError::InvalidCredentials);
    }

    let token = encode_jwt(user.id, &config.jwt_secret, config.jwt_expiration_hours)
        .map_err(token_issue_error)?;

    info!("[LOGIN] User {} authenticated", user.id);

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            token,
            user: public_user(user.id, user.name, user.email),
        }),
    ))
}

#[cfg(test)]
mod tests;
