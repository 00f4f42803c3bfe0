//! HTTP API module for the C4000XG exporter
//!
//! # Endpoints
//! - `GET /health` — health check
//! - `GET /metrics` — scrape the modem and return Prometheus metrics

pub mod handlers;
mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
