//! Outbound JSON webhook client.
//!
//! Posts `{"source": "ficha-cadastral", "data": <payload>}` to the configured URL.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::WebhookConfig;

/// Value of the `source` field in every envelope.
pub const WEBHOOK_SOURCE: &str = "ficha-cadastral";

/// Webhook delivery errors.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No target URL configured.
    #[error("webhook URL is not configured")]
    NotConfigured,
    /// The receiver answered with a non-success status.
    #[error("webhook delivery failed with status {0}")]
    Status(u16),
    /// Transport-level failure.
    #[error("webhook request failed: {0}")]
    Request(String),
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    source: &'static str,
    data: &'a T,
}

/// HTTP client for the outbound webhook.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: Option<String>,
}

impl WebhookClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WebhookError::Request(e.to_string()))?;

        Ok(Self {
            http,
            url: config.url.clone().filter(|url| !url.trim().is_empty()),
        })
    }

    /// Whether a target URL is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Posts the payload wrapped in the standard envelope.
    ///
    /// Returns the parsed JSON response, or an empty object when the body is not JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL is configured, the request fails, or the
    /// receiver answers with a non-2xx status.
    pub async fn send<T: Serialize + Sync>(&self, payload: &T) -> Result<Value, WebhookError> {
        let url = self.url.as_deref().ok_or(WebhookError::NotConfigured)?;

        let response = self
            .http
            .post(url)
            .json(&Envelope {
                source: WEBHOOK_SOURCE,
                data: payload,
            })
            .send()
            .await
            .map_err(|e| WebhookError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| WebhookError::Request(e.to_string()))?;

        Ok(serde_json::from_slice(&body).unwrap_or_else(|_| Value::Object(serde_json::Map::new())))
    }
}
