//! Webhook client.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::NotifyError;

/// A notification payload for the bot endpoint.
///
/// The wire body always carries all three fields; an absent recipient is
/// serialized as JSON `null`, never omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Recipient address, when one is configured.
    pub email: Option<String>,
    /// Message text; markdown is passed through untouched.
    pub message: String,
    /// Project the message belongs to.
    pub project: String,
}

/// Client for the fixed notification webhook.
pub struct WebhookClient {
    http: reqwest::Client,
}

impl WebhookClient {
    /// Create a client with the default HTTP settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Post one notification to `endpoint`, authorized by `token`.
    ///
    /// Any status below 400 counts as delivered. On an error status the
    /// response body is read in full and carried in the error.
    pub async fn send(
        &self,
        endpoint: &str,
        token: &str,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        debug!(%endpoint, project = %notification.project, "posting notification");

        let response = self
            .http
            .post(endpoint)
            .bearer_auth(token)
            .json(notification)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "notification endpoint refused the payload");
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
