//! HTTP API handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::info;

use crate::clock::ProcessClock;
use crate::metadata::ServiceInfo;

/// Application state shared with handlers.
///
/// Immutable after start-up; copied into each request.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Identity of the running build.
    pub info: ServiceInfo,
    /// Clock anchored at process start.
    pub clock: ProcessClock,
}

impl AppState {
    /// Create new app state.
    pub fn new(info: ServiceInfo, clock: ProcessClock) -> Self {
        Self { info, clock }
    }

    /// Build the liveness payload for the current instant.
    pub fn liveness_report(&self) -> LivenessReport {
        LivenessReport {
            status: "ok",
            timestamp: self.clock.timestamp(),
            service: self.info.name,
            version: self.info.version,
            uptime: self.clock.uptime_secs(),
        }
    }

    /// Build the root endpoint payload.
    pub fn welcome_message(&self) -> WelcomeMessage {
        WelcomeMessage {
            message: self.info.greeting(),
            service: self.info.name,
            version: self.info.version,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceInfo::from_build(), ProcessClock::start())
    }
}

/// Liveness probe response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LivenessReport {
    /// Always "ok".
    pub status: &'static str,
    /// ISO-8601 UTC instant the report was built.
    pub timestamp: String,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Seconds since process start.
    pub uptime: f64,
}

/// Root endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeMessage {
    /// "<name> is running!".
    pub message: String,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Liveness handler - always returns 200 while the process can answer.
pub async fn health_live(State(state): State<AppState>) -> impl IntoResponse {
    info!("request received /health/live");
    (StatusCode::OK, Json(state.liveness_report()))
}

/// Root handler - returns a greeting with the service identity.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    info!("request received /");
    (StatusCode::OK, Json(state.welcome_message()))
}
