//! Server bootstrap: bind the listener and serve the API router.

use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::{Result, ServiceError};

/// Address the server listens on for a given configuration.
pub fn listen_addr(config: &Config) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port))
}

/// Bind a TCP listener, mapping failures to [`ServiceError::Bind`].
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    let bind_error = |source| ServiceError::Bind { addr, source };

    let listener = TcpListener::bind(addr).await.map_err(bind_error)?;
    let local = listener.local_addr().map_err(bind_error)?;
    info!("HTTP server listening on {}", local);

    Ok(listener)
}

/// Serve the API on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// Log start-up diagnostics, bind the configured port and serve.
///
/// Only returns on failure; a bind failure is fatal and never retried.
pub async fn run(config: &Config, state: AppState) -> Result<()> {
    info!("Starting server on port {}...", config.port);
    info!("Service: {}", state.info);
    info!("Health check: {}", config.health_url());
    info!("Root endpoint: {}", config.root_url());

    let listener = bind(listen_addr(config)).await?;
    serve(listener, state).await
}
