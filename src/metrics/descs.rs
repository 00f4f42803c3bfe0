// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process-wide cache of metric descriptors
//!
//! Descriptors are created on first use and never evicted, so a metric keeps the
//! same name, help text and label keys across pulls.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::names::MetricNameConverter;
use super::sample::{MetricDesc, MetricKind};

#[derive(Debug)]
pub struct MetricDescs {
    converter: MetricNameConverter,
    // (prefix, vendor field) -> descriptor
    descs: RwLock<HashMap<(String, String), Arc<MetricDesc>>>,
}

impl MetricDescs {
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            converter: MetricNameConverter::new(namespace),
            descs: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        self.converter.namespace()
    }

    /// Returns the cached descriptor for `(prefix, field)`, creating it on first use.
    ///
    /// `help`, `kind` and `label_keys` only apply when the descriptor is created.
    pub fn get_or_insert(
        &self,
        prefix: &str,
        field: &str,
        help: &str,
        kind: MetricKind,
        label_keys: &'static [&'static str],
    ) -> Arc<MetricDesc> {
        let key = (prefix.to_string(), field.to_string());
        {
            let descs = self.descs.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(desc) = descs.get(&key) {
                return desc.clone();
            }
        }

        let mut descs = self.descs.write().unwrap_or_else(PoisonError::into_inner);
        descs
            .entry(key)
            .or_insert_with(|| {
                let name = self.converter.convert(prefix, field);
                tracing::debug!("New metric {} from field {}", name, field);
                Arc::new(MetricDesc {
                    name,
                    help: help.to_string(),
                    kind,
                    label_keys,
                })
            })
            .clone()
    }

    /// All descriptors seen so far, sorted by name
    #[must_use]
    pub fn describe(&self) -> Vec<Arc<MetricDesc>> {
        let descs = self.descs.read().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<_> = descs.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: &[&str] = &["mac_address"];

    #[test]
    fn test_empty_before_first_use() {
        let descs = MetricDescs::new("ns");
        assert!(descs.is_empty());
        assert!(descs.describe().is_empty());
    }

    #[test]
    fn test_same_field_returns_same_descriptor() {
        let descs = MetricDescs::new("ns");
        let a = descs.get_or_insert(
            "client_",
            "BytesSent",
            "BytesSent",
            MetricKind::Counter,
            LABELS,
        );
        let b = descs.get_or_insert("client_", "BytesSent", "other", MetricKind::Gauge, &[]);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.name, "ns_client_bytes_sent");
        assert_eq!(b.help, "BytesSent");
        assert_eq!(descs.len(), 1);
    }

    #[test]
    fn test_distinct_fields_do_not_collide() {
        let descs = MetricDescs::new("ns");
        let a = descs.get_or_insert(
            "client_",
            "BytesSent",
            "BytesSent",
            MetricKind::Counter,
            LABELS,
        );
        let b = descs.get_or_insert(
            "client_",
            "BytesReceived",
            "BytesReceived",
            MetricKind::Counter,
            LABELS,
        );
        let c = descs.get_or_insert("", "BytesSent", "BytesSent", MetricKind::Counter, LABELS);
        assert_ne!(a.name, b.name);
        assert_ne!(a.name, c.name);
        assert_eq!(c.name, "ns_bytes_sent");
        assert_eq!(descs.len(), 3);
    }

    #[test]
    fn test_describe_sorted() {
        let descs = MetricDescs::new("ns");
        descs.get_or_insert("", "Zeta", "Zeta", MetricKind::Gauge, LABELS);
        descs.get_or_insert("", "Alpha", "Alpha", MetricKind::Gauge, LABELS);
        let names: Vec<_> = descs.describe().iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["ns_alpha", "ns_zeta"]);
    }

    #[test]
    fn test_concurrent_inserts() {
        let descs = Arc::new(MetricDescs::new("ns"));
        let fields: Vec<String> = (0..50).map(|i| format!("Field{i}")).collect();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let descs = descs.clone();
                let fields = &fields;
                scope.spawn(move || {
                    for field in fields {
                        descs.get_or_insert("", field, field, MetricKind::Gauge, LABELS);
                    }
                });
            }
        });

        assert_eq!(descs.len(), 50);
        let first = descs.get_or_insert("", "Field7", "Field7", MetricKind::Gauge, LABELS);
        assert_eq!(first.name, "ns_field_7");
    }
}
