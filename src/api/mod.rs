//! HTTP API module for the root and liveness endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, LivenessReport, WelcomeMessage};
pub use routes::{create_router, HEALTH_LIVE_PATH};
