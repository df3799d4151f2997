//! # Password Hashing
//!
//! Password hashing and verification using Argon2.
//!
//! Every hash carries its own randomly generated salt in PHC string format,
//! so identical passwords never produce identical records.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Errors from password hashing and verification.
#[derive(Debug, Error)]
pub enum PwdError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("stored password hash is malformed: {0}")]
    InvalidHash(String),
}

/// Hash a password with a fresh per-record salt.
pub fn hash_password(password: &str) -> Result<String, PwdError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PwdError::Hash(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch; errors only when the stored hash itself
/// cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PwdError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| PwdError::InvalidHash(e.to_string()))?;

    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
