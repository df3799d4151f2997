use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User entity representing a complete credential record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Data structure for creating a new user.
///
/// Password must be hashed before creating.
#[derive(Debug, Clone)]
pub struct UserForCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl UserForCreate {
    /// Create a new `UserForCreate` instance.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password_hash,
        }
    }
}

/// Blog post entity.
///
/// `author_id` is set at creation and never changes afterwards.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data structure for creating a new post.
#[derive(Debug, Clone)]
pub struct PostForCreate {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_id: i64,
}

/// Data structure for partially updating an existing post.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct PostForUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl PostForUpdate {
    /// Create a new empty `PostForUpdate` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the content.
    pub fn content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the image URL.
    pub fn image_url(mut self, image_url: String) -> Self {
        self.image_url = Some(image_url);
        self
    }

    /// True when no field is set, i.e. the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.image_url.is_none()
    }
}

/// A post joined with its author's public fields, used for read endpoints.
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_name: String,
    pub author_email: String,
}
