//! # Data Transfer Objects
//!
//! Request and response structures for the HTTP API.
//!
//! All DTOs use **snake_case** field names in JSON (default serde behavior).
//! Optional fields are omitted when `None` using
//! `#[serde(skip_serializing_if = "Option::is_none")]`.

pub mod auth;
pub mod blog;

pub use auth::{AuthResponse, ErrorResponse, LoginRequest, RegisterRequest, UserInfo};
pub use blog::{CreatePostRequest, DeleteResponse, PostResponse, UpdatePostRequest};
