//! Webhook alert channel
//!
//! Publishes alerts as a JSON `{subject, message}` POST to a fixed
//! destination URL. Fire-and-forget: one attempt, no retry.

use crate::NotifyError;
use detective_domain::traits::AlertChannel;
use serde_json::json;
use std::time::Duration;

/// Default timeout for webhook publishes (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP implementation of `AlertChannel`
pub struct WebhookChannel {
    url: String,
    client: reqwest::blocking::Client,
}

impl WebhookChannel {
    /// Create a channel publishing to the given URL
    pub fn new(url: impl Into<String>) -> Result<Self, NotifyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| NotifyError::Alert(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl AlertChannel for WebhookChannel {
    type Error = NotifyError;

    fn publish(&self, subject: &str, message: &str) -> Result<(), Self::Error> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "subject": subject, "message": message }))
            .send()
            .map_err(|e| NotifyError::Alert(format!("Publish failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NotifyError::Alert(format!("HTTP {}: {}", status, error_text)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_creation() {
        let channel = WebhookChannel::new("https://alerts.example/hook").unwrap();
        assert_eq!(channel.url, "https://alerts.example/hook");
    }

    #[test]
    fn test_unreachable_destination_is_alert_error() {
        let channel = WebhookChannel::new("http://127.0.0.1:9/hook").unwrap();
        let result = channel.publish("subject", "message");
        assert!(matches!(result, Err(NotifyError::Alert(_))));
    }
}
