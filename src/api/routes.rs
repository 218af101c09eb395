//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health_live, root, AppState};
use crate::metrics::track_http;

/// Path of the liveness probe.
pub const HEALTH_LIVE_PATH: &str = "/health/live";

/// Create the API router.
///
/// Unregistered paths fall through to axum's default 404, and other methods on
/// registered paths to its default 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(HEALTH_LIVE_PATH, get(health_live))
        .route_layer(middleware::from_fn(track_http))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
