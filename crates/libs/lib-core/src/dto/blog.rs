//! # Blog Post Data Transfer Objects
//!
//! Request and response structures for the blog post endpoints.
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /api/blogs` - [`CreatePostRequest`] -> [`PostResponse`]
//! - `GET /api/blogs` - [`Vec<PostResponse>`], newest first
//! - `GET /api/blogs/{id}` - [`PostResponse`]
//! - `PUT /api/blogs/{id}` - [`UpdatePostRequest`] -> [`PostResponse`]
//! - `DELETE /api/blogs/{id}` - [`DeleteResponse`]
//!
//! Update requests carry partial semantics: a field that is absent from the
//! body means "leave unchanged", never "clear".

use serde::{Deserialize, Serialize};

use super::auth::UserInfo;

/// Request body for creating a blog post.
///
/// `image_url` is an optional attachment reference; file storage itself is
/// handled elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request body for partially updating a blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A blog post as returned to clients, author embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub author: UserInfo,
    pub created_at: String,
    pub updated_at: String,
}

/// Confirmation body for a successful deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub message: String,
}
