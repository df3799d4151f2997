//! # Application Configuration
//!
//! Configuration loaded from environment variables and validated on startup
//! to fail fast if misconfigured.
//!
//! The loaded [`Config`] is passed explicitly into the server state and from
//! there into the token codec and auth middleware. There is no process-global
//! config: tests inject a distinct secret per scenario by constructing their
//! own `Config` value.

use lib_utils::envs::{get_env, get_env_parse};

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for JWT token signing and verification
    ///
    /// **Must be at least 32 characters long** for security.
    pub jwt_secret: String,

    /// JWT token validity period in hours
    ///
    /// After this period, users must re-authenticate.
    /// Valid range: 1-720 hours (1 hour to 30 days)
    pub jwt_expiration_hours: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` is required; without it the service refuses to start
    /// rather than signing tokens with a default secret.
    pub fn from_env() -> Result<Self, String> {
        let database_url =
            get_env("DATABASE_URL").unwrap_or_else(|_| "sqlite:data/blog.db".to_string());

        let jwt_secret = get_env("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in environment".to_string())?;

        // Tokens default to a 7-day lifetime.
        let jwt_expiration_hours = match get_env_parse::<i64>("JWT_EXPIRATION_HOURS") {
            Ok(hours) => hours,
            Err(lib_utils::envs::Error::MissingEnv(_)) => 168,
            Err(e) => return Err(format!("JWT_EXPIRATION_HOURS must be a valid number: {}", e)),
        };

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_hours,
        })
    }

    /// Validate configuration values against security and business rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if self.jwt_expiration_hours < 1 || self.jwt_expiration_hours > 720 {
            return Err("JWT_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string());
        }

        Ok(())
    }
}
