//! MPS Site REST API
//!
//! HTTP API layer over the content store, built with Axum.
//!
//! # Endpoints
//!
//! ## Public content
//! - `GET /api/v1/services` - Services (`?lang=`, `?category=`)
//! - `GET /api/v1/services/grouped` - Services grouped by category
//! - `GET /api/v1/posts` - Blog posts
//! - `GET /api/v1/config` - Site configuration
//! - `GET /api/v1/about` - About page in one language
//! - `GET /api/v1/language`, `PUT /api/v1/language` - Language preference
//!
//! ## Contact form
//! - `POST /api/v1/leads` - Submit an inquiry
//!
//! ## Admin
//! - `POST /api/v1/admin/login`, `POST /api/v1/admin/logout`, `GET /api/v1/admin/session`
//! - `GET /api/v1/admin/overview`
//! - `GET /api/v1/admin/leads`, `GET /api/v1/admin/leads/:id`
//! - `GET|DELETE /api/v1/admin/config/draft`
//! - `PATCH /api/v1/admin/config/draft/about`, `PATCH /api/v1/admin/config/draft/contact`
//! - `POST /api/v1/admin/config/draft/commit`
//! - `PUT /api/v1/admin/config`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use mps_site::api::{serve, ApiConfig, AppState};
//! use mps_site::notify::LogSink;
//! use mps_site::storage::{ContentStore, StorageConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ContentStore::open(&StorageConfig::default())?);
//!     store.initialize()?;
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, Arc::new(LogSink), config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, patch, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    let admin_routes = Router::new()
        .route("/login", post(routes::admin::login))
        .route("/logout", post(routes::admin::logout))
        .route("/session", get(routes::admin::session))
        .route("/overview", get(routes::admin::overview))
        .route("/leads", get(routes::admin::list_leads))
        .route("/leads/:id", get(routes::admin::get_lead))
        .route("/config", put(routes::admin::replace_config))
        .route(
            "/config/draft",
            get(routes::admin::get_draft).delete(routes::admin::discard_draft),
        )
        .route("/config/draft/about", patch(routes::admin::edit_about))
        .route("/config/draft/contact", patch(routes::admin::edit_contact))
        .route("/config/draft/commit", post(routes::admin::commit_draft));

    let api_routes = Router::new()
        // Public content
        .route("/services", get(routes::content::list_services))
        .route("/services/grouped", get(routes::content::grouped_services))
        .route("/posts", get(routes::content::list_posts))
        .route("/config", get(routes::content::get_config))
        .route("/about", get(routes::content::about))
        .route(
            "/language",
            get(routes::content::get_language).put(routes::content::set_language),
        )
        // Contact form
        .route("/leads", post(routes::leads::submit_lead))
        .nest("/admin", admin_routes);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("MPS site API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("MPS site API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
