// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the C4000XG exporter
//!
//! Loads configuration from environment variables (and an optional `.env` file).

use std::fmt;
use std::time::Duration;

use crate::error::{AppError, Result};

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    pub const MODEM_HOST: &str = "192.168.0.1";
    pub const MODEM_USER: &str = "admin";
    pub const METRICS_NAMESPACE: &str = "c4000xg";
    pub const PORT: u16 = 9998;
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const MODEM_HOST: &str = "MODEM_HOST";
    pub const MODEM_USER: &str = "MODEM_USER";
    pub const MODEM_PASSWORD: &str = "MODEM_PASSWORD";
    pub const METRICS_NAMESPACE: &str = "METRICS_NAMESPACE";
    pub const PORT: &str = "PORT";
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const REQUEST_TIMEOUT_SECONDS: &str = "REQUEST_TIMEOUT_SECONDS";
}

/// Connection settings for the modem management API
#[derive(Clone)]
pub struct ModemConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub request_timeout: Duration,
}

impl ModemConfig {
    /// Base URL of the management API.
    ///
    /// A host that already names a scheme is used as-is, otherwise HTTPS is assumed.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}

impl fmt::Debug for ModemConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModemConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub namespace: String,
    pub modem: ModemConfig,
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `MODEM_PASSWORD` is missing or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(env_vars::MODEM_HOST).unwrap_or_else(|| defaults::MODEM_HOST.to_string());
        let username =
            lookup(env_vars::MODEM_USER).unwrap_or_else(|| defaults::MODEM_USER.to_string());
        let password = lookup(env_vars::MODEM_PASSWORD).ok_or_else(|| {
            AppError::Config(format!(
                "Environment variable {} must be defined",
                env_vars::MODEM_PASSWORD
            ))
        })?;

        let namespace = lookup(env_vars::METRICS_NAMESPACE)
            .unwrap_or_else(|| defaults::METRICS_NAMESPACE.to_string());
        if namespace.trim().is_empty() {
            return Err(AppError::Config(format!(
                "{} cannot be empty",
                env_vars::METRICS_NAMESPACE
            )));
        }

        let port = match lookup(env_vars::PORT) {
            Some(v) => v.parse::<u16>().map_err(|e| {
                AppError::Config(format!("Invalid value in ${}: {}", env_vars::PORT, e))
            })?,
            None => defaults::PORT,
        };
        let server_addr =
            lookup(env_vars::SERVER_ADDR).unwrap_or_else(|| format!("0.0.0.0:{port}"));

        let request_timeout_secs = match lookup(env_vars::REQUEST_TIMEOUT_SECONDS) {
            Some(v) => v.parse::<u64>().map_err(|e| {
                AppError::Config(format!(
                    "Invalid value in ${}: {}",
                    env_vars::REQUEST_TIMEOUT_SECONDS,
                    e
                ))
            })?,
            None => defaults::REQUEST_TIMEOUT_SECS,
        };

        Ok(Config {
            server_addr,
            namespace,
            modem: ModemConfig {
                host,
                username,
                password,
                request_timeout: Duration::from_secs(request_timeout_secs),
            },
        })
    }
}
