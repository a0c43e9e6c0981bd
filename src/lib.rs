//! wordpose library - per-frame keypoint read service
//!
//! Serves stored keypoint sequences for words over a single read-only
//! HTTP endpoint. Records are pre-populated by an external ingestion
//! process; this service never writes.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};

/// Application state shared across HTTP handlers
///
/// Holds the resolved storage URL only. Each request opens its own
/// connection, so there is no pool or other shared resource here.
#[derive(Clone)]
pub struct AppState {
    /// Resolved storage connection URL
    pub database_url: Arc<String>,
}

impl AppState {
    /// Create new application state
    pub fn new(database_url: String) -> Self {
        Self {
            database_url: Arc::new(database_url),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/keypoints/:word", get(api::get_keypoints))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
