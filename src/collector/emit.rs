// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Generic emission of record fields as samples

use std::sync::Arc;

use crate::metrics::{
    MetricDesc, MetricDescs, MetricKind, Sample, is_identifier_field, parse_value,
};
use crate::modem::Record;

/// Value of `key` in an optional record, empty when either is missing
pub(super) fn field<'r>(record: Option<&'r Record>, key: &str) -> &'r str {
    record
        .and_then(|r| r.get(key))
        .map(String::as_str)
        .unwrap_or_default()
}

/// Collects the samples of one scrape
pub(super) struct SampleEmitter<'a> {
    descs: &'a MetricDescs,
    samples: Vec<Sample>,
}

impl<'a> SampleEmitter<'a> {
    pub(super) fn new(descs: &'a MetricDescs) -> Self {
        Self {
            descs,
            samples: Vec::new(),
        }
    }

    pub(super) fn desc(
        &self,
        prefix: &str,
        field: &str,
        help: &str,
        kind: MetricKind,
        label_keys: &'static [&'static str],
    ) -> Arc<MetricDesc> {
        self.descs.get_or_insert(prefix, field, help, kind, label_keys)
    }

    pub(super) fn emit(&mut self, desc: Arc<MetricDesc>, value: f64, label_values: &[&str]) {
        self.samples.push(Sample {
            desc,
            value,
            label_values: label_values.iter().map(|v| (*v).to_string()).collect(),
        });
    }

    /// Emits every numeric field of `record`.
    ///
    /// `*ID` fields are skipped, a `MHz` unit is dropped and values that do not
    /// parse as numbers are ignored.
    pub(super) fn emit_record(
        &mut self,
        prefix: &str,
        record: &Record,
        label_keys: &'static [&'static str],
        label_values: &[&str],
    ) {
        for (name, value) in record {
            if is_identifier_field(name) {
                continue;
            }
            let Some(value) = parse_value(value) else {
                continue;
            };
            let desc = self.desc(prefix, name, name, MetricKind::classify(name), label_keys);
            self.emit(desc, value, label_values);
        }
    }

    pub(super) fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}
