//! Webhook notification sink
//!
//! POSTs lead notifications as JSON to a form-handling endpoint.

use super::{LeadNotification, NotificationSink, NotifyError};
use async_trait::async_trait;
use reqwest::Client;

/// Configuration for the webhook sink
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Endpoint receiving the POST
    pub endpoint: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Maximum attempts per notification
    pub max_retries: u32,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            request_timeout_ms: 5000,
            max_retries: 2,
        }
    }
}

impl WebhookConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

/// HTTP sink
pub struct WebhookSink {
    client: Client,
    config: WebhookConfig,
}

impl WebhookSink {
    pub fn new(config: WebhookConfig) -> Result<Self, NotifyError> {
        if config.endpoint.trim().is_empty() {
            return Err(NotifyError::Config("webhook endpoint is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    async fn post_once(&self, notification: &LeadNotification) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(notification)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Timeout
                } else if e.is_connect() {
                    NotifyError::Unavailable
                } else {
                    NotifyError::Request(e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        if status.as_u16() == 429 {
            // Honour Retry-After, but never wait longer than one request may take
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            if let Some(secs) = retry_after {
                let wait = std::time::Duration::from_secs(secs)
                    .min(std::time::Duration::from_millis(self.config.request_timeout_ms));
                tokio::time::sleep(wait).await;
            }
            return Err(NotifyError::RateLimited);
        }

        let message = response.text().await.unwrap_or_default();
        Err(NotifyError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn send(&self, notification: &LeadNotification) -> Result<(), NotifyError> {
        let mut last_error = NotifyError::Unavailable;

        for attempt in 0..self.config.max_retries.max(1) {
            if attempt > 0 {
                // Backoff: 1s, 4s, 9s...
                let delay = std::time::Duration::from_secs((attempt as u64).pow(2));
                tokio::time::sleep(delay).await;
            }

            match self.post_once(notification).await {
                Ok(()) => {
                    tracing::debug!(lead_id = %notification.lead_id, attempt, "Notification delivered");
                    return Ok(());
                }
                // Client errors will not improve on retry
                Err(NotifyError::Api { status, message }) if (400..500).contains(&status) => {
                    return Err(NotifyError::Api { status, message });
                }
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "Notification attempt failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
