// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Per-pull grouping of samples into metric families

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use prometheus_client::collector::Collector;
use prometheus_client::encoding::{DescriptorEncoder, EncodeMetric};
use prometheus_client::metrics::counter::ConstCounter;
use prometheus_client::metrics::gauge::ConstGauge;

use super::sample::{MetricDesc, MetricKind, Sample};

#[derive(Debug)]
struct SampleFamily {
    desc: Arc<MetricDesc>,
    samples: Vec<Sample>,
    seen: HashSet<Vec<String>>,
}

/// Samples of one scrape, grouped by exposition name
///
/// Registered as a collector on a fresh registry for every pull.
#[derive(Debug, Default)]
pub struct SampleFamilies {
    families: BTreeMap<String, SampleFamily>,
}

impl SampleFamilies {
    #[must_use]
    pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> Self {
        let mut families = Self::default();
        for sample in samples {
            families.push(sample);
        }
        families
    }

    /// Adds a sample; returns false if it was dropped.
    ///
    /// The first descriptor seen for an exposition name fixes its type and label
    /// keys, so `x` (gauge) and `x_total` (counter) cannot both be written.
    /// A repeated label value set within the family keeps the first sample.
    pub fn push(&mut self, sample: Sample) -> bool {
        let family = self
            .families
            .entry(exposition_name(&sample.desc).to_string())
            .or_insert_with(|| SampleFamily {
                desc: sample.desc.clone(),
                samples: Vec::new(),
                seen: HashSet::new(),
            });

        if family.desc.kind != sample.desc.kind || family.desc.label_keys != sample.desc.label_keys
        {
            tracing::debug!(
                "Dropping {} sample, {} already owns the name",
                sample.desc.name,
                family.desc.name
            );
            return false;
        }
        if !family.seen.insert(sample.label_values.clone()) {
            tracing::trace!("Dropping duplicate {} sample", sample.desc.name);
            return false;
        }
        family.samples.push(sample);
        true
    }

    /// Number of distinct metric identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.families.values().map(|f| f.samples.len()).sum()
    }
}

/// Name written to the exposition; the encoder appends `_total` to counters itself
fn exposition_name(desc: &MetricDesc) -> &str {
    match desc.kind {
        MetricKind::Counter => desc.name.strip_suffix("_total").unwrap_or(&desc.name),
        MetricKind::Gauge => &desc.name,
    }
}

/// Escapes backslashes, double quotes and line feeds in a label value
fn escape_label_value(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '"', '\n']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

impl Collector for SampleFamilies {
    fn encode(&self, mut encoder: DescriptorEncoder) -> Result<(), std::fmt::Error> {
        for family in self.families.values() {
            let desc = &family.desc;
            let mut metric_encoder = encoder.encode_descriptor(
                exposition_name(desc),
                &desc.help,
                None,
                desc.kind.metric_type(),
            )?;
            for sample in &family.samples {
                let labels: Vec<(&str, String)> = sample
                    .labels()
                    .map(|(key, value)| (key, escape_label_value(value).into_owned()))
                    .collect();
                let sample_encoder = metric_encoder.encode_family(&labels)?;
                match desc.kind {
                    MetricKind::Counter => ConstCounter::new(sample.value).encode(sample_encoder)?,
                    MetricKind::Gauge => ConstGauge::new(sample.value).encode(sample_encoder)?,
                }
            }
        }
        Ok(())
    }
}
