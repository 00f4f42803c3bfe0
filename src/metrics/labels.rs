//! Label keys for each family of device metrics

/// Per-client radio metrics
pub const CLIENT_LABELS: &[&str] = &["mac_address", "hostname", "ssid"];

/// Host presence (`client_info`)
pub const HOST_INFO_LABELS: &[&str] = &[
    "mac_address",
    "ip",
    "hostname",
    "ssid",
    "frequency_band",
    "wifi_standard",
    "vendor",
];

/// Ethernet and other interface counters
pub const NETWORK_LABELS: &[&str] = &["type", "name", "alias", "mac_address", "ssid"];

/// Temperature sensors
pub const TEMPERATURE_LABELS: &[&str] = &["name", "alias"];
