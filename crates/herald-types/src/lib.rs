//! # herald-types
//!
//! Shared domain types for prompt-herald.
//!
//! - [`TriggerEvent`]: the hook input record
//! - [`NotificationPayload`] and [`Priority`]: the outbound notify body
//! - [`Settings`]: layered configuration
//! - [`HeraldError`]: shared error type

pub mod config;
pub mod error;
pub mod event;
pub mod notification;

pub use config::{NotifySettings, Settings};
pub use error::HeraldError;
pub use event::{TriggerEvent, USER_PROMPT_SUBMIT};
pub use notification::{NotificationPayload, Priority};
