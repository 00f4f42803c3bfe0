// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Interface counters and temperature sensors

use once_cell::sync::Lazy;
use regex::Regex;

use crate::metrics::{MetricKind, NETWORK_LABELS, TEMPERATURE_LABELS};
use crate::modem::RecordSet;

use super::emit::{SampleEmitter, field};

/// `Device.<Category>.<Subtype>.<index>`
static INTERFACE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Device\.([^.]+)\.([^.]+)\.\d+$").expect("Invalid interface path regex")
});

/// Emits numeric fields of every enabled interface and its `.Stats` sibling
pub(super) fn collect_network_metrics(emitter: &mut SampleEmitter<'_>, records: &RecordSet) {
    for (key, entry) in records {
        let Some(caps) = INTERFACE_PATH.captures(key) else {
            continue;
        };
        if field(Some(entry), "Enable") != "true" {
            continue;
        }

        let kind = format!("{}_{}", caps[1].to_lowercase(), caps[2].to_lowercase());
        let values = [
            kind.as_str(),
            field(Some(entry), "Name"),
            field(Some(entry), "Alias"),
            field(Some(entry), "MACAddress"),
            field(Some(entry), "SSID"),
        ];

        emitter.emit_record("", entry, NETWORK_LABELS, &values);
        if let Some(stats) = records.get(&format!("{key}.Stats")) {
            emitter.emit_record("", stats, NETWORK_LABELS, &values);
        }
    }
}

/// Emits one `temperature` gauge per enabled sensor with a numeric value
pub(super) fn collect_temperature_metrics(emitter: &mut SampleEmitter<'_>, records: &RecordSet) {
    let desc = emitter.desc(
        "",
        "temperature",
        "TemperatureSensor (number)",
        MetricKind::Gauge,
        TEMPERATURE_LABELS,
    );

    for entry in records.values() {
        if field(Some(entry), "Enable") != "true" {
            continue;
        }
        let Ok(value) = field(Some(entry), "Value").parse::<f64>() else {
            continue;
        };
        let values = [field(Some(entry), "Name"), field(Some(entry), "Alias")];
        emitter.emit(desc.clone(), value, &values);
    }
}
