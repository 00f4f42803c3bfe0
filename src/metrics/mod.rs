// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metric naming, descriptors and exposition for the C4000XG exporter
//!
//! Vendor field names become namespaced snake case identifiers, cached for the
//! process lifetime. Samples of a pull are grouped into families and encoded
//! next to the exporter's own scrape metrics.

mod descs;
mod families;
mod labels;
mod names;
mod registry;
mod sample;

#[cfg(test)]
mod tests;

/// Label keys per metric family
pub use labels::{CLIENT_LABELS, HOST_INFO_LABELS, NETWORK_LABELS, TEMPERATURE_LABELS};

/// Identifier conversion and descriptor cache
pub use descs::MetricDescs;
pub use names::{MetricNameConverter, snake_case};

/// Samples and their per-pull exposition
pub use families::SampleFamilies;
pub use sample::{MetricDesc, MetricKind, Sample, is_identifier_field, parse_value};

/// Exporter self-metrics
pub use registry::ExporterMetrics;
