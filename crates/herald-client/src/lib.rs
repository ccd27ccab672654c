//! Notification dispatch for prompt-herald.
//!
//! This crate provides:
//! - The [`Notifier`] trait, a best-effort delivery contract
//! - [`HttpNotifier`], which POSTs JSON payloads to the local notification server
//!
//! # Example
//!
//! ```rust,no_run
//! use herald_client::{HttpNotifier, Notifier};
//! use herald_types::{NotificationPayload, Priority};
//!
//! #[tokio::main]
//! async fn main() {
//!     let notifier = HttpNotifier::with_default_endpoint();
//!     let payload =
//!         NotificationPayload::new("Sol", "Got it, I'm fixing login for you", "voice-id")
//!             .with_priority(Priority::Low);
//!
//!     // Never fails; delivery errors are logged.
//!     notifier.dispatch(&payload).await;
//! }
//! ```

pub mod client;
pub mod error;

pub use client::{HttpNotifier, Notifier, DEFAULT_ENDPOINT};
pub use error::ClientError;
