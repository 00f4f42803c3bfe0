// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Wireless client and host presence metrics

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::metrics::{CLIENT_LABELS, HOST_INFO_LABELS, MetricKind};
use crate::modem::{Record, Scrape};

use super::emit::{SampleEmitter, field};

/// Prefix for every per-client metric
pub(super) const CLIENT_PREFIX: &str = "client_";

/// Interface path replaced by `Ethernet ` for wired hosts
const ETHERNET_INTERFACE_PREFIX: &str = "Device.Ethernet.Interface.";

/// Per-client entries below an access point, e.g. `...AccessPoint.1.AssociatedDevice.3`
static ASSOCIATED_DEVICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.AssociatedDevice\.\d+$").expect("Invalid associated device regex")
});

/// Emits radio statistics for every active associated client.
///
/// Returns the associated device records by MAC address for the host pass.
pub(super) fn collect_client_metrics<'s>(
    emitter: &mut SampleEmitter<'_>,
    scrape: &'s Scrape,
) -> BTreeMap<&'s str, &'s Record> {
    let mut by_mac = BTreeMap::new();

    for (key, device) in &scrape.access_points {
        if !ASSOCIATED_DEVICE.is_match(key) || field(Some(device), "Active") != "true" {
            continue;
        }

        let mac = field(Some(device), "MACAddress");
        by_mac.insert(mac, device);

        let host = scrape.hosts.get(mac);
        let ssid = scrape.ssids.get(field(host, "Layer1Interface"));
        let values = [mac, field(host, "HostName"), field(ssid, "SSID")];

        emitter.emit_record(CLIENT_PREFIX, device, CLIENT_LABELS, &values);
        if let Some(stats) = scrape.access_points.get(&format!("{key}.Stats")) {
            emitter.emit_record(CLIENT_PREFIX, stats, CLIENT_LABELS, &values);
        }
    }

    tracing::trace!("{} active wireless clients", by_mac.len());
    by_mac
}

/// Emits one `client_info` sample per active host
pub(super) fn collect_host_info(
    emitter: &mut SampleEmitter<'_>,
    scrape: &Scrape,
    associated: &BTreeMap<&str, &Record>,
) {
    let desc = emitter.desc(
        CLIENT_PREFIX,
        "info",
        "info",
        MetricKind::Gauge,
        HOST_INFO_LABELS,
    );

    for host in scrape.hosts.values() {
        if field(Some(host), "Active") != "1" {
            continue;
        }

        let mac = field(Some(host), "PhysAddress");
        let interface = field(Some(host), "Layer1Interface");
        let ssid_record = scrape.ssids.get(interface);
        let ssid = match ssid_record.and_then(|r| r.get("SSID")) {
            Some(ssid) => ssid.clone(),
            None => interface.replacen(ETHERNET_INTERFACE_PREFIX, "Ethernet ", 1),
        };

        let lower_layer = field(ssid_record, "LowerLayers");
        let radio = scrape
            .radios
            .get(lower_layer.strip_suffix('.').unwrap_or(lower_layer));
        let device = associated.get(mac).copied();

        let values = [
            mac,
            field(Some(host), "IPAddress"),
            field(Some(host), "HostName"),
            ssid.as_str(),
            field(radio, "OperatingFrequencyBand"),
            field(device, "OperatingStandard"),
            field(device, "X_GWS_VendorId"),
        ];
        emitter.emit(desc.clone(), 1.0, &values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_associated_device_pattern() {
        assert!(ASSOCIATED_DEVICE.is_match("Device.WiFi.AccessPoint.1.AssociatedDevice.3"));
        assert!(!ASSOCIATED_DEVICE.is_match("Device.WiFi.AccessPoint.1.AssociatedDevice.3.Stats"));
        assert!(!ASSOCIATED_DEVICE.is_match("Device.WiFi.AccessPoint.1"));
        assert!(!ASSOCIATED_DEVICE.is_match("Device.WiFi.AccessPoint.1.AssociatedDevice."));
    }
}
