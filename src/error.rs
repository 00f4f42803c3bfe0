// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the C4000XG exporter

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The modem could not be reached or a request did not complete
    #[error("Transport error: {0}")]
    Transport(String),

    /// The login request could not be sent
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Response body is not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl From<std::fmt::Error> for AppError {
    fn from(error: std::fmt::Error) -> Self {
        Self::Metrics(error.to_string())
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_transport_error() {
        let err = AppError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_authentication_error() {
        let err = AppError::Authentication("unable to log in".to_string());
        assert_eq!(err.to_string(), "Authentication error: unable to log in");
    }

    #[test]
    fn test_decode_error() {
        let err = AppError::Decode("expected value".to_string());
        assert_eq!(err.to_string(), "Decode error: expected value");
    }

    #[test]
    fn test_fmt_error_conversion() {
        let app_err: AppError = std::fmt::Error.into();
        assert!(matches!(app_err, AppError::Metrics(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_addr_parse_error_conversion() {
        let parse_result = "invalid".parse::<std::net::SocketAddr>();
        assert!(parse_result.is_err());
        let app_err: AppError = parse_result.unwrap_err().into();
        assert!(matches!(app_err, AppError::AddrParse(_)));
    }
}
