// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metric descriptors, samples and field classification

use std::sync::Arc;

use prometheus_client::metrics::MetricType;

/// Field name suffixes that mark a monotonically increasing value
const COUNTER_SUFFIXES: [&str; 6] = ["Failures", "Total", "Received", "Sent", "Time", "Count"];

/// Unit suffix stripped from frequency values such as `2400MHz`
const MHZ_SUFFIX: &str = "MHz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    /// Classifies a vendor field by its name
    #[must_use]
    pub fn classify(field: &str) -> Self {
        if COUNTER_SUFFIXES.iter().any(|s| field.ends_with(s)) {
            MetricKind::Counter
        } else {
            MetricKind::Gauge
        }
    }

    #[must_use]
    pub fn metric_type(self) -> MetricType {
        match self {
            MetricKind::Counter => MetricType::Counter,
            MetricKind::Gauge => MetricType::Gauge,
        }
    }
}

/// Shape of a metric: identifier, help text, type and label keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDesc {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub label_keys: &'static [&'static str],
}

/// One observation emitted by a scrape
#[derive(Debug, Clone)]
pub struct Sample {
    pub desc: Arc<MetricDesc>,
    pub value: f64,
    /// Positional values for `desc.label_keys`
    pub label_values: Vec<String>,
}

impl Sample {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.desc.name
    }

    #[must_use]
    pub fn kind(&self) -> MetricKind {
        self.desc.kind
    }

    /// Ordered `(label name, label value)` pairs
    pub fn labels(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.desc
            .label_keys
            .iter()
            .copied()
            .zip(self.label_values.iter().map(String::as_str))
    }

    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// Fields ending in `ID` are internal identifiers, never metrics
#[must_use]
pub fn is_identifier_field(field: &str) -> bool {
    field.ends_with("ID")
}

/// Parses a field value, dropping a trailing `MHz` unit
#[must_use]
pub fn parse_value(value: &str) -> Option<f64> {
    let value = value.strip_suffix(MHZ_SUFFIX).unwrap_or(value);
    value.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_suffixes() {
        for field in [
            "AuthFailures",
            "BytesTotal",
            "PacketsReceived",
            "BytesSent",
            "UpTime",
            "RetransCount",
        ] {
            assert_eq!(MetricKind::classify(field), MetricKind::Counter, "{field}");
        }
    }

    #[test]
    fn test_gauge_fallback() {
        assert_eq!(MetricKind::classify("Value"), MetricKind::Gauge);
        assert_eq!(
            MetricKind::classify("OperatingFrequencyBand"),
            MetricKind::Gauge
        );
        assert_eq!(MetricKind::classify("TxPackets"), MetricKind::Gauge);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("2400MHz"), Some(2400.0));
        assert_eq!(parse_value("-42"), Some(-42.0));
        assert_eq!(parse_value("1.5"), Some(1.5));
        assert_eq!(parse_value("Enabled"), None);
        assert_eq!(parse_value("true"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("MHz"), None);
    }

    #[test]
    fn test_identifier_fields() {
        assert!(is_identifier_field("ParentID"));
        assert!(is_identifier_field("ID"));
        assert!(!is_identifier_field("SSID_Id"));
        assert!(!is_identifier_field("Identity"));
    }

    #[test]
    fn test_sample_labels() {
        let desc = Arc::new(MetricDesc {
            name: "ns_client_rssi".to_string(),
            help: "RSSI".to_string(),
            kind: MetricKind::Gauge,
            label_keys: &["mac_address", "hostname"],
        });
        let sample = Sample {
            desc,
            value: -40.0,
            label_values: vec!["AA".to_string(), "laptop".to_string()],
        };
        let labels: Vec<_> = sample.labels().collect();
        assert_eq!(labels, vec![("mac_address", "AA"), ("hostname", "laptop")]);
        assert_eq!(sample.label("hostname"), Some("laptop"));
        assert_eq!(sample.label("ssid"), None);
    }
}
