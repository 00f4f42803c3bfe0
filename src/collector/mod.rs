// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Scrape-and-normalize pipeline
//!
//! Every pull logs in to the modem, fetches all object domains, joins them and
//! emits samples. Only the metric descriptor cache outlives a pull.

mod clients;
mod emit;
mod interfaces;


use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, ModemConfig};
use crate::error::Result;
use crate::metrics::{MetricDesc, MetricDescs, Sample};
use crate::modem::{ModemClient, Scrape};

use emit::SampleEmitter;

/// Collects device samples on demand
pub struct Exporter {
    modem: ModemConfig,
    descs: MetricDescs,
}

impl Exporter {
    #[must_use]
    pub fn new(modem: ModemConfig, namespace: impl Into<String>) -> Self {
        Self {
            modem,
            descs: MetricDescs::new(namespace),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.modem.clone(), config.namespace.clone())
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        self.descs.namespace()
    }

    /// Metric shapes seen so far; empty before the first successful scrape
    #[must_use]
    pub fn describe(&self) -> Vec<Arc<MetricDesc>> {
        self.descs.describe()
    }

    /// Number of metric shapes seen so far
    #[must_use]
    pub fn known_metrics(&self) -> usize {
        self.descs.len()
    }

    /// Performs one full scrape.
    ///
    /// # Errors
    ///
    /// Fails without samples if the login or any fetch fails.
    pub async fn collect(&self) -> Result<Vec<Sample>> {
        let start = Instant::now();
        let client = ModemClient::login(&self.modem).await?;
        let scrape = client.scrape().await?;
        let samples = self.samples_from(&scrape);
        tracing::debug!(
            "Scraped {} samples from {} in {:.3}s",
            samples.len(),
            self.modem.host,
            start.elapsed().as_secs_f64()
        );
        Ok(samples)
    }

    /// Joins the record sets of one scrape into samples
    #[must_use]
    pub fn samples_from(&self, scrape: &Scrape) -> Vec<Sample> {
        let mut emitter = SampleEmitter::new(&self.descs);
        let associated = clients::collect_client_metrics(&mut emitter, scrape);
        clients::collect_host_info(&mut emitter, scrape, &associated);
        interfaces::collect_network_metrics(&mut emitter, &scrape.ethernet);
        interfaces::collect_temperature_metrics(&mut emitter, &scrape.temperature);
        emitter.into_samples()
    }
}
