//! # Post Repository
//!
//! Database access layer for blog posts.
//!
//! Read queries join the author's public fields so responses can embed them
//! without a second round-trip. Updates are partial: only fields present in
//! the `PostForUpdate` are written.

use super::models::{Post, PostForCreate, PostForUpdate, PostWithAuthor};
use super::DbPool;
use sqlx::query_as;

const SELECT_WITH_AUTHOR: &str = r#"
    SELECT p.id, p.title, p.content, p.image_url, p.author_id,
           p.created_at, p.updated_at,
           u.name AS author_name, u.email AS author_email
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

/// Post repository for database operations.
pub struct PostRepository;

impl PostRepository {
    /// Create a new post and return it.
    pub async fn create(pool: &DbPool, post_data: PostForCreate) -> Result<Post, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO posts (title, content, image_url, author_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&post_data.title)
        .bind(&post_data.content)
        .bind(&post_data.image_url)
        .bind(post_data.author_id)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();

        query_as::<_, Post>("SELECT * FROM posts WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a post by id.
    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
        query_as::<_, Post>("SELECT * FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by id with its author's public fields.
    pub async fn find_with_author(
        pool: &DbPool,
        id: i64,
    ) -> Result<Option<PostWithAuthor>, sqlx::Error> {
        let query = format!("{} WHERE p.id = ?", SELECT_WITH_AUTHOR);
        query_as::<_, PostWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts with their authors, newest first.
    pub async fn list_with_authors(pool: &DbPool) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
        // id breaks ties within the same CURRENT_TIMESTAMP second.
        let query = format!("{} ORDER BY p.created_at DESC, p.id DESC", SELECT_WITH_AUTHOR);
        query_as::<_, PostWithAuthor>(&query).fetch_all(pool).await
    }

    /// Partially update an existing post and return it.
    ///
    /// Only fields that are `Some` in `post_data` will be updated. An empty
    /// update returns the row unchanged.
    pub async fn update(
        pool: &DbPool,
        id: i64,
        post_data: PostForUpdate,
    ) -> Result<Post, sqlx::Error> {
        // Build update query dynamically
        let mut updates = Vec::new();

        if post_data.title.is_some() {
            updates.push("title = ?");
        }
        if post_data.content.is_some() {
            updates.push("content = ?");
        }
        if post_data.image_url.is_some() {
            updates.push("image_url = ?");
        }

        if updates.is_empty() {
            return query_as::<_, Post>("SELECT * FROM posts WHERE id = ?")
                .bind(id)
                .fetch_one(pool)
                .await;
        }

        updates.push("updated_at = CURRENT_TIMESTAMP");
        let query_str = format!("UPDATE posts SET {} WHERE id = ?", updates.join(", "));

        let mut query = sqlx::query(&query_str);

        if let Some(ref title) = post_data.title {
            query = query.bind(title);
        }
        if let Some(ref content) = post_data.content {
            query = query.bind(content);
        }
        if let Some(ref image_url) = post_data.image_url {
            query = query.bind(image_url);
        }

        query.bind(id).execute(pool).await?;

        query_as::<_, Post>("SELECT * FROM posts WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a post by id.
    pub async fn delete(pool: &DbPool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
