//! # Authentication Data Transfer Objects
//!
//! Request and response structures for the authentication endpoints.
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /api/auth/register` - [`RegisterRequest`] -> [`AuthResponse`]
//! - `POST /api/auth/login` - [`LoginRequest`] -> [`AuthResponse`]
//!
//! ## Wire Format
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "ann@example.com",
//!   "password": "secret123"
//! }
//! ```
//!
//! Response:
//! ```text
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": "1",
//!     "name": "Ann",
//!     "email": "ann@example.com"
//!   }
//! }
//! ```
//!
//! The password hash never appears in any response.

use serde::{Deserialize, Serialize};

/// Request body for user registration.
///
/// Fields default to empty when absent so a missing key and an empty value
/// both surface as the same "missing fields" failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for user login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public identity fields returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Response body for successful registration and login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
