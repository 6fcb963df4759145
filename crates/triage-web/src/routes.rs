//! Route definitions for the dashboard

use crate::{
    handlers::{health, pages},
    state::AppState,
};
use axum::{Router, http::StatusCode, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Build the dashboard router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // The single page
        .route("/", get(pages::dashboard))
        // Liveness probe
        .route("/health", get(health::health_check))
        // Fallback handler for unknown routes
        .fallback(not_found_handler)
        .layer(CompressionLayer::new())
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
