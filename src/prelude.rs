// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use c4000xg_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, ModemConfig};
pub use crate::error::{AppError, Result};

// Pipeline
pub use crate::collector::Exporter;
pub use crate::metrics::{
    CLIENT_LABELS, ExporterMetrics, HOST_INFO_LABELS, MetricDesc, MetricKind, NETWORK_LABELS,
    Sample, SampleFamilies, TEMPERATURE_LABELS,
};

// Modem client
pub use crate::modem::{Domain, ModemClient, Record, RecordSet, Scrape};
