// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = load(&[("MODEM_PASSWORD", "secret")]).unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:9998");
        assert_eq!(config.namespace, "c4000xg");
        assert_eq!(config.modem.host, "192.168.0.1");
        assert_eq!(config.modem.username, "admin");
        assert_eq!(config.modem.password, "secret");
        assert_eq!(config.modem.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_password_is_config_error() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("MODEM_PASSWORD"));
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("MODEM_PASSWORD", "x"), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_port_and_server_addr_override() {
        let config = load(&[("MODEM_PASSWORD", "x"), ("PORT", "9100")]).unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:9100");

        let config = load(&[
            ("MODEM_PASSWORD", "x"),
            ("PORT", "9100"),
            ("SERVER_ADDR", "127.0.0.1:8000"),
        ])
        .unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:8000");
    }

    #[test]
    fn test_empty_namespace_rejected() {
        let err = load(&[("MODEM_PASSWORD", "x"), ("METRICS_NAMESPACE", " ")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = load(&[("MODEM_PASSWORD", "x"), ("REQUEST_TIMEOUT_SECONDS", "soon")])
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_base_url() {
        let config = load(&[("MODEM_PASSWORD", "x")]).unwrap();
        assert_eq!(config.modem.base_url(), "https://192.168.0.1");

        let config = load(&[("MODEM_PASSWORD", "x"), ("MODEM_HOST", "http://127.0.0.1:8080/")])
            .unwrap();
        assert_eq!(config.modem.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = load(&[("MODEM_PASSWORD", "hunter2")]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
