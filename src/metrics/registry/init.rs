// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;

use super::ExporterMetrics;

impl ExporterMetrics {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            scrape_success: Counter::default(),
            scrape_errors: Counter::default(),
            scrape_duration_milliseconds: Gauge::default(),
            scrape_samples: Gauge::default(),
        }
    }

    /// Builds a fresh registry holding the self-metrics
    pub(super) fn registry(&self) -> Registry {
        let ns = &self.namespace;
        let mut registry = Registry::default();

        registry.register(
            format!("{ns}_scrape_success"),
            "Successful scrapes of the modem",
            self.scrape_success.clone(),
        );
        registry.register(
            format!("{ns}_scrape_errors"),
            "Failed scrapes of the modem",
            self.scrape_errors.clone(),
        );
        registry.register(
            format!("{ns}_scrape_duration_milliseconds"),
            "Duration of last scrape in milliseconds",
            self.scrape_duration_milliseconds.clone(),
        );
        registry.register(
            format!("{ns}_scrape_samples"),
            "Samples emitted by the last successful scrape",
            self.scrape_samples.clone(),
        );

        registry
    }
}
