use super::card::TeamsMessage;
use crate::error::{NotifyError, TilError};
use std::time::Duration;

/// Posts messages to an MS Teams incoming webhook
pub struct TeamsNotifier {
    webhook_url: String,
    client: reqwest::Client,
}

impl TeamsNotifier {
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> Result<Self, TilError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(NotifyError::from)?;

        Ok(Self::with_client(webhook_url, client))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(webhook_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            client,
        }
    }

    /// Send a message once. Any non-success status is an error.
    pub async fn send(&self, message: &TeamsMessage) -> Result<(), TilError> {
        let resp = self
            .client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await
            .map_err(NotifyError::from)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::HttpStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::info!("Webhook accepted notification ({})", status);
        Ok(())
    }
}
