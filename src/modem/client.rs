// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Authenticated client for the modem management API

use reqwest::header::CONTENT_TYPE;

use crate::config::ModemConfig;
use crate::error::{AppError, Result};

use super::protocol::{LOGIN_PATH, encode_form, query_url};
use super::types::{Data, Domain, RecordSet, Scrape, data_to_map};

/// Session against one modem
///
/// Each instance owns its own cookie store; nothing is shared between scrapes.
pub struct ModemClient {
    http: reqwest::Client,
    base_url: String,
}

impl ModemClient {
    /// Logs in and returns a client carrying the session cookie
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Authentication`] if the login request cannot be sent.
    /// The login response itself is not checked beyond a warning on non-2xx status.
    pub async fn login(config: &ModemConfig) -> Result<Self> {
        // The modem presents a self-signed certificate.
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(true)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {e}")))?;

        let base_url = config.base_url();
        let form = encode_form(&[
            ("username", config.username.as_str()),
            ("password", config.password.as_str()),
        ]);

        tracing::trace!("Logging in to {} as {}", base_url, config.username);
        let response = http
            .post(format!("{base_url}{LOGIN_PATH}"))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form)
            .send()
            .await
            .map_err(|e| AppError::Authentication(format!("Unable to log in: {e}")))?;

        if !response.status().is_success() {
            tracing::warn!(
                "Login to {} answered with status {}",
                base_url,
                response.status()
            );
        }

        Ok(Self { http, base_url })
    }

    /// Fetches one object domain as a record set
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] if the request does not complete and
    /// [`AppError::Decode`] if the body is not the expected JSON.
    pub async fn fetch(&self, domain: Domain) -> Result<RecordSet> {
        let url = query_url(&self.base_url, domain);
        let response = self
            .http
            .get(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Unable to get {domain}: {e}")))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(format!("Unable to read {domain}: {e}")))?;

        let data: Data = serde_json::from_slice(&body)
            .map_err(|e| AppError::Decode(format!("Cannot parse {url} as JSON: {e}")))?;

        let records = data_to_map(&data, domain.key_field());
        tracing::trace!("Fetched {} {} records", records.len(), domain);
        Ok(records)
    }

    /// Fetches all six domains, in order, stopping at the first failure
    pub async fn scrape(&self) -> Result<Scrape> {
        Ok(Scrape {
            hosts: self.fetch(Domain::Hosts).await?,
            access_points: self.fetch(Domain::AccessPoint).await?,
            ssids: self.fetch(Domain::Ssid).await?,
            radios: self.fetch(Domain::Radio).await?,
            ethernet: self.fetch(Domain::Ethernet).await?,
            temperature: self.fetch(Domain::TemperatureStatus).await?,
        })
    }
}
