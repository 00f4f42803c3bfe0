// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for naming and classification working together

#[cfg(test)]
mod test {
    use crate::metrics::{MetricDescs, MetricKind, SampleFamilies, parse_value, snake_case};

    #[test]
    fn test_descriptor_name_matches_converter() {
        let descs = MetricDescs::new("c4000xg");
        let desc = descs.get_or_insert(
            "client_",
            "OperatingFrequencyBand",
            "OperatingFrequencyBand",
            MetricKind::classify("OperatingFrequencyBand"),
            &["mac_address"],
        );
        assert_eq!(desc.name, "c4000xg_client_operating_frequency_band");
        assert_eq!(desc.kind, MetricKind::Gauge);
    }

    #[test]
    fn test_frequency_value_and_name() {
        assert_eq!(snake_case("OperatingFrequency"), "operating_frequency");
        assert_eq!(parse_value("5000MHz"), Some(5000.0));
    }

    #[test]
    fn test_families_empty_by_default() {
        let families = SampleFamilies::default();
        assert_eq!(families.len(), 0);
        assert_eq!(families.sample_count(), 0);
    }
}
