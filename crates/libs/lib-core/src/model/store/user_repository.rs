//! # User Repository
//!
//! Database access layer for user records.
//!
//! Implements the repository pattern over the `users` table. The table
//! enforces `UNIQUE(email)`; callers treat a unique-constraint violation on
//! insert as the authoritative "email already registered" signal, since the
//! find-then-create sequence is not atomic under concurrent registrations.

use super::models::{User, UserForCreate};
use super::DbPool;
use sqlx::query_as;

/// User repository for database operations.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by their email address.
    ///
    /// Returns `Ok(None)` when no user has that email.
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user record and return it.
    ///
    /// Fails with a database unique-violation error when the email is
    /// already registered.
    pub async fn create(pool: &DbPool, user_data: UserForCreate) -> Result<User, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)")
            .bind(&user_data.name)
            .bind(&user_data.email)
            .bind(&user_data.password_hash)
            .execute(pool)
            .await?;

        let id = result.last_insert_rowid();

        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
