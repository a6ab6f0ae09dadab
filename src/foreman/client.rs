//! Foreman HTTP client

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{ForemanError, Result};
use crate::settings::Settings;

/// Foreman API client
///
/// Performs authenticated GET requests with a fixed timeout and classifies
/// failures. Foreman installs commonly run with self-signed certificates,
/// so certificate verification is disabled - an accepted operational risk.
pub struct ForemanClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl ForemanClient {
    /// Create a new Foreman client from validated settings
    pub fn new(settings: &Settings) -> Self {
        Self::with_timeout(settings, Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout
    pub(crate) fn with_timeout(settings: &Settings, timeout: Duration) -> Self {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: settings.base_url.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
        }
    }

    /// The configured environments endpoint URL
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET with basic auth and parse the JSON body.
    ///
    /// Transport failures are classified into Connection/Timeout/Request,
    /// non-2xx statuses into HttpStatus, and unparseable or misshapen bodies
    /// into MalformedResponse. Every failure is terminal for this
    /// invocation - there is no retry.
    pub(crate) async fn get_json<T>(&self, url: &str, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", context, url);

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForemanError::HttpStatus {
                status: status.as_u16(),
                context: format!("Failed to fetch {}", context),
            });
        }

        println!("API request status code: {}", status.as_u16());

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            ForemanError::MalformedResponse(format!("Failed to parse {}: {}", context, e))
        })
    }
}

#[cfg(test)]
impl ForemanClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(&Settings {
            base_url: base_url.to_string(),
            username: "test-user".to_string(),
            password: "test-pass".to_string(),
            hfile: "test_hosts_".to_string(),
        })
    }
}
