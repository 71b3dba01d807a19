//! # Classboard API
//!
//! The API crate provides the web server for Classboard: the timetable
//! builder with slot clash checking, and faculty search and reviews.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into calls on the core crate
//! - **Middleware**: Error mapping to HTTP responses
//! - **Config**: Environment-driven settings
//!
//! Timetables are never stored here; clients send their session's entries
//! with each request. Reviews go through a [`ReviewStore`].

/// Configuration module for API settings
pub mod config;
/// Request extractors with JSON error bodies
pub mod extract;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{path::Path, sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use classboard_core::{reviews::FacultyCatalog, slots::SlotTables};
use classboard_db::store::ReviewStore;
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Everything in here is read-only after startup except the review store,
/// which handles its own synchronisation.
pub struct ApiState {
    /// Where reviews are read from and appended to
    pub store: Arc<dyn ReviewStore>,
    /// Faculty members that can be searched and reviewed
    pub catalog: FacultyCatalog,
    /// Slot → cell and period → time tables used by the validator
    pub slots: SlotTables,
}

impl ApiState {
    pub fn new(store: Arc<dyn ReviewStore>, catalog: FacultyCatalog) -> Self {
        Self {
            store,
            catalog,
            slots: SlotTables::standard(),
        }
    }
}

/// Installs the global tracing subscriber at `level`.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Reads the faculty catalog from a JSON file, or returns an empty catalog
/// when no path is configured.
pub fn load_catalog(path: Option<&Path>) -> Result<FacultyCatalog> {
    let Some(path) = path else {
        warn!("FACULTY_CATALOG not set; faculty search will return no matches");
        return Ok(FacultyCatalog::default());
    };

    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read faculty catalog {}", path.display()))?;
    let catalog = FacultyCatalog::from_json(&json)?;
    info!("Loaded {} faculty from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Builds the application router with all routes and the shared state.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Faculty search and summaries
        .merge(routes::faculty::routes())
        // Review submission and counts
        .merge(routes::review::routes())
        // Timetable builder endpoints
        .merge(routes::timetable::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and state
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use classboard_api::{ApiState, config::ApiConfig, start_server};
/// # use classboard_core::reviews::FacultyCatalog;
/// # use classboard_db::store::MemoryReviewStore;
/// # async fn run() -> eyre::Result<()> {
/// let state = Arc::new(ApiState::new(
///     Arc::new(MemoryReviewStore::new()),
///     FacultyCatalog::default(),
/// ));
/// start_server(ApiConfig::default(), state).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
