// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Application state shared across HTTP handlers

use crate::collector::Exporter;
use crate::config::Config;
use crate::metrics::ExporterMetrics;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub exporter: Exporter,
    pub metrics: ExporterMetrics,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let exporter = Exporter::from_config(&config);
        let metrics = ExporterMetrics::new(config.namespace.clone());
        Self {
            config,
            exporter,
            metrics,
        }
    }
}
