use axum::{
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;

use crate::api::AppState;
use crate::metrics::SampleFamilies;

const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

/// GET /metrics
///
/// Runs one full scrape. A failed scrape answers 500 without device samples.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    tracing::debug!("/metrics scrape {}", state.config.modem.host);
    let start = Instant::now();

    let samples = match state.exporter.collect().await {
        Ok(samples) => samples,
        Err(e) => {
            let duration = start.elapsed().as_secs_f64();
            state.metrics.record_scrape_error(duration);
            tracing::warn!(
                "Failed to scrape {} in {:.3}s: {}",
                state.config.modem.host,
                duration,
                e
            );
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to scrape modem: {}", e),
            )
                .into_response();
        }
    };

    let families = SampleFamilies::from_samples(samples);
    state
        .metrics
        .record_scrape_success(start.elapsed().as_secs_f64(), families.sample_count());

    match state.metrics.encode(families) {
        Ok(metrics_text) => (
            StatusCode::OK,
            [(CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)],
            metrics_text,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
                .into_response()
        }
    }
}
