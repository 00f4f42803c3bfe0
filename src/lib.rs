// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # C4000XG Exporter
//!
//! Prometheus exporter for CenturyLink C4000XG home modems.
//!
//! Every pull logs in to the modem's management API, fetches hosts, access
//! points, SSIDs, radios, ethernet interfaces and temperature sensors, joins
//! them and exposes every numeric field as a metric.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `collector`: scrape, join and sample emission
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: metric naming, descriptors and exposition
//! - `modem`: modem management API client
//! - `prelude`: commonly used types and traits

mod api;
mod collector;
mod config;
mod error;
mod metrics;
mod modem;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, ModemConfig};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Scrape-and-normalize pipeline
pub use collector::Exporter;

/// Metric naming, samples and exposition
pub use metrics::{
    ExporterMetrics, MetricDesc, MetricDescs, MetricKind, MetricNameConverter, Sample,
    SampleFamilies, snake_case,
};

/// Modem client and record types
pub use modem::{Data, Domain, ModemClient, Record, RecordSet, Scrape, data_to_map};

/// Login form encoding (public for tests)
pub use modem::{encode_form, query_url};
