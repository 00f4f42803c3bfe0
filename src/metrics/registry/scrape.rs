// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Scrape bookkeeping and encoding

use prometheus_client::encoding::text::encode;

use crate::error::Result;
use crate::metrics::families::SampleFamilies;

use super::ExporterMetrics;

impl ExporterMetrics {
    /// Encodes the self-metrics and one pull's samples as OpenMetrics text
    pub fn encode(&self, families: SampleFamilies) -> Result<String> {
        let mut registry = self.registry();
        registry.register_collector(Box::new(families));
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }

    pub fn record_scrape_success(&self, duration_secs: f64, samples: usize) {
        self.scrape_success.inc();
        self.record_scrape_duration(duration_secs);
        #[allow(clippy::cast_possible_wrap)]
        self.scrape_samples.set(samples as i64);
    }

    pub fn record_scrape_error(&self, duration_secs: f64) {
        self.scrape_errors.inc();
        self.record_scrape_duration(duration_secs);
    }

    fn record_scrape_duration(&self, duration_secs: f64) {
        #[allow(clippy::cast_possible_truncation)]
        let millis = (duration_secs * 1000.0).round() as i64;
        self.scrape_duration_milliseconds.set(millis);
    }

    #[must_use]
    pub fn scrape_success_count(&self) -> u64 {
        self.scrape_success.get()
    }

    #[must_use]
    pub fn scrape_error_count(&self) -> u64 {
        self.scrape_errors.get()
    }
}
