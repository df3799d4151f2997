//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! This module builds the Axum router, applies middleware, and starts the
//! HTTP server. The router itself is exported so tests can drive it directly
//! with an in-memory database and an injected configuration.

// region: --- Imports
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use lib_core::{create_pool, Config, DbPool};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::handlers::{auth, blogs, health};
use crate::middleware::{log_requests, require_auth, stamp_req};
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
///
/// Carries the connection pool and the loaded configuration; the auth
/// middleware and the handlers read the signing secret from here rather than
/// from process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:4000")
    pub bind_address: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
    /// Database migrations path
    pub migrations_path: &'static str,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:4000".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            migrations_path: "./migrations",
        }
    }
}
// endregion: --- Server Configuration

// region: --- Router
/// Build the application router over the given state.
///
/// Public routes: root/health status and the auth endpoints. Everything
/// under `/api/blogs` sits behind the bearer-token gateway.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    let protected = Router::new()
        .route("/api/blogs", post(blogs::create_post).get(blogs::list_posts))
        .route(
            "/api/blogs/{id}",
            get(blogs::get_post)
                .put(blogs::update_post)
                .delete(blogs::delete_post),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    public.merge(protected).with_state(state)
}
// endregion: --- Router

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration loading or validation fails (e.g. missing `JWT_SECRET`)
/// - Database connection fails
/// - Database migrations fail
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Configure tracing subscriber
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    info!("Blog backend starting");
    info!("Log level: {}", log_level);

    dotenvy::dotenv().ok();

    info!("Loading configuration...");
    let app_config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    app_config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!("Database URL: {}", app_config.database_url);

    // Ensure parent directory exists for a file-backed SQLite database
    if let Some(db_path) = app_config.database_url.strip_prefix("sqlite:") {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                info!("Created database directory: {:?}", parent);
            }
        }
    }

    info!("Connecting to database...");
    let pool = create_pool(&app_config.database_url).await?;

    info!("Running database migrations from: {}", config.migrations_path);
    let migrator =
        sqlx::migrate::Migrator::new(std::path::Path::new(config.migrations_path)).await?;
    migrator.run(&pool).await?;
    info!("Migrations complete");

    let state = AppState {
        db: pool,
        config: app_config,
    };

    let origins: Vec<axum::http::HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state)
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(stamp_req));

    info!("Listening on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
// endregion: --- Server Setup
