//! Error types for input acquisition.

use std::time::Duration;

use thiserror::Error;

/// Fatal errors while acquiring the trigger event.
///
/// Any of these aborts the run with exit code 1.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input stream did not close before the deadline
    #[error("Timeout reading from stdin after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Input was not a valid trigger event record
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Reading the input stream failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
