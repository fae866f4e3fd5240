//! Application route configuration.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::handlers::{health_handler::health_check, not_found, site_routes};
use super::AppState;
use crate::config::PATH_STATIC;

/// Create the application router with all routes configured.
///
/// Page scripts are served from `static_dir`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(site_routes())
        .nest_service(PATH_STATIC, ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
