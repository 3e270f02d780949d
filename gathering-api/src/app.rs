/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use gathering_api::{app::AppState, config::Config};
/// use gathering_shared::store::MemStorage;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(MemStorage::new(), config);
/// let app = gathering_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError, middleware::security::SecurityHeadersLayer};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use gathering_shared::store::Storage;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Record store shared by all handlers
pub type SharedStorage = Arc<RwLock<dyn Storage>>;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// The one record store for this process
    pub store: SharedStorage,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state around a store
    ///
    /// The store is built once at startup and lives as long as the process.
    pub fn new<S: Storage + 'static>(store: S, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                          # Health check
/// └── /api/
///     ├── /events
///     │   ├── GET  /                   # List events (?category=)
///     │   ├── POST /                   # Create event
///     │   └── GET  /category/:category # Events in one category
///     └── /users
///         ├── POST /                   # Create user
///         ├── GET  /:id                # User by id
///         └── GET  /by-username/:name  # User by username
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Security headers
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let event_routes = Router::new()
        .route(
            "/",
            get(routes::events::list_events).post(routes::events::create_event),
        )
        .route(
            "/category/:category",
            get(routes::events::list_events_in_category),
        );

    let user_routes = Router::new()
        .route("/", post(routes::users::create_user))
        .route("/:id", get(routes::users::get_user))
        .route(
            "/by-username/:username",
            get(routes::users::get_user_by_username),
        );

    let api_routes = Router::new()
        .nest("/events", event_routes)
        .nest("/users", user_routes);

    let cors = if state.config.allows_any_origin() {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No such route".to_string())
}
