// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Exporter self-metrics and per-pull encoding

mod init;
mod scrape;

use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::gauge::Gauge;

/// Metrics about the exporter itself, kept for the process lifetime
///
/// Device samples are never stored here; they are encoded next to these
/// on every pull and then dropped.
#[derive(Clone, Debug)]
pub struct ExporterMetrics {
    namespace: String,
    // scrape status counters
    scrape_success: Counter,
    scrape_errors: Counter,
    // last scrape
    scrape_duration_milliseconds: Gauge,
    scrape_samples: Gauge,
}
