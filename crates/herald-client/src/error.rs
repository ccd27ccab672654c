//! Error types for the notification client.

use thiserror::Error;

/// Errors that can occur when delivering a notification.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request could not be sent or the response could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Notification server error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// Payload could not be encoded
    #[error("Serialization failed: {0}")]
    Serialization(String),
}
