//! HTTP notifier for the local notification server.
//!
//! Delivery is best-effort: one request, no retry, no timeout. Failures are
//! logged to stderr and never reach the caller.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, error};

use herald_types::NotificationPayload;

use crate::error::ClientError;

/// Default endpoint for the notification server.
pub const DEFAULT_ENDPOINT: &str = herald_types::config::DEFAULT_NOTIFY_ENDPOINT;

/// Best-effort notification delivery.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a payload. Never fails; errors are logged and swallowed.
    async fn dispatch(&self, payload: &NotificationPayload);
}

/// Notifier that POSTs JSON payloads over HTTP.
pub struct HttpNotifier {
    client: Client,
    endpoint: String,
}

impl HttpNotifier {
    /// Create a notifier for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a notifier for [`DEFAULT_ENDPOINT`].
    pub fn with_default_endpoint() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// The endpoint this notifier posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a single notify request.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if the request cannot be sent and
    /// `ClientError::Status` if the server answers with a non-2xx status.
    pub async fn try_dispatch(&self, payload: &NotificationPayload) -> Result<(), ClientError> {
        let body = payload
            .to_json()
            .map_err(|e| ClientError::Serialization(e.to_string()))?;

        debug!(endpoint = %self.endpoint, title = %payload.title, "Sending notification");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        debug!(status = status.as_u16(), "Notification delivered");
        Ok(())
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn dispatch(&self, payload: &NotificationPayload) {
        if let Err(e) = self.try_dispatch(payload).await {
            error!(endpoint = %self.endpoint, error = %e, "Failed to send notification");
        }
    }
}
