//! Minimal HTTP status service.
//!
//! Exposes two unauthenticated `GET` endpoints:
//!
//! ```text
//! GET /             {"message": "<name> is running!", "service": ..., "version": ...}
//! GET /health/live  {"status": "ok", "timestamp": ..., "service": ..., "version": ..., "uptime": ...}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metadata`]: Service identity from build metadata
//! - [`clock`]: Process start anchor for uptime and timestamps
//! - [`api`]: HTTP handlers and router
//! - [`metrics`]: Request instrumentation
//! - [`server`]: Listener bootstrap

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod metadata;
pub mod metrics;
pub mod server;

pub use config::Config;
pub use error::{Result, ServiceError};
