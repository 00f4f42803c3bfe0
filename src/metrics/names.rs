//! Conversion of vendor field names into metric identifiers

use once_cell::sync::Lazy;
use regex::Regex;

static LOWER_TO_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^_A-Z])([A-Z])").expect("Invalid lower/upper boundary regex"));

static ACRONYM_TO_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("Invalid acronym boundary regex"));

static LETTER_TO_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z])([0-9]+)").expect("Invalid digit boundary regex"));

/// Converts a camel case vendor name to snake case
///
/// `MACAddress` becomes `mac_address`, `Channel2` becomes `channel_2`.
#[must_use]
pub fn snake_case(name: &str) -> String {
    let snaked = LOWER_TO_UPPER.replace_all(name, "${1}_${2}");
    let snaked = ACRONYM_TO_WORD.replace_all(&snaked, "${1}_${2}");
    let snaked = LETTER_TO_DIGITS.replace_all(&snaked, "${1}_${2}");
    snaked.to_lowercase()
}

/// Builds `<namespace>_<prefix><snake_case field>` identifiers
#[derive(Debug, Clone)]
pub struct MetricNameConverter {
    namespace: String,
}

impl MetricNameConverter {
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `prefix` is used verbatim and carries its own trailing underscore
    #[must_use]
    pub fn convert(&self, prefix: &str, field: &str) -> String {
        format!("{}_{}{}", self.namespace, prefix, snake_case(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acronym_boundary() {
        assert_eq!(snake_case("MACAddress"), "mac_address");
        assert_eq!(snake_case("IPAddress"), "ip_address");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(
            snake_case("OperatingFrequencyBand"),
            "operating_frequency_band"
        );
        assert_eq!(snake_case("BytesSent"), "bytes_sent");
    }

    #[test]
    fn test_digits() {
        assert_eq!(snake_case("Channel2"), "channel_2");
        assert_eq!(snake_case("Rx2Bytes"), "rx_2_bytes");
    }

    #[test]
    fn test_vendor_prefixed_field() {
        assert_eq!(snake_case("X_GWS_VendorId"), "x_gws_vendor_id");
    }

    #[test]
    fn test_idempotent() {
        for name in ["MACAddress", "OperatingFrequencyBand", "Channel2", "TxPackets"] {
            let once = snake_case(name);
            assert_eq!(snake_case(&once), once);
        }
    }

    #[test]
    fn test_convert_with_namespace_and_prefix() {
        let converter = MetricNameConverter::new("c4000xg");
        assert_eq!(converter.convert("", "MACAddress"), "c4000xg_mac_address");
        assert_eq!(
            converter.convert("client_", "TxPackets"),
            "c4000xg_client_tx_packets"
        );
        assert_eq!(converter.convert("", "Channel2"), "c4000xg_channel_2");
    }
}
