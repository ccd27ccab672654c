//! Trigger event read from the hook input channel.
//!
//! A trigger event is the single structured record that starts one run.
//! It is constructed once and never mutated.

use serde::{Deserialize, Serialize};

/// Known hook event names.
pub const USER_PROMPT_SUBMIT: &str = "UserPromptSubmit";

/// The input record delivered on stdin by the agent host.
///
/// Every field is required; a record missing any of them is rejected
/// as malformed by the input reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// Session identifier
    pub session_id: String,

    /// The free-form user request (may be empty)
    pub prompt: String,

    /// Path to the session transcript on disk
    pub transcript_path: String,

    /// Event type name (e.g., "UserPromptSubmit")
    pub hook_event_name: String,
}

impl TriggerEvent {
    /// Create a new trigger event.
    pub fn new(
        session_id: impl Into<String>,
        prompt: impl Into<String>,
        transcript_path: impl Into<String>,
        hook_event_name: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            prompt: prompt.into(),
            transcript_path: transcript_path.into(),
            hook_event_name: hook_event_name.into(),
        }
    }

    /// Whether this event was emitted for a submitted user prompt.
    pub fn is_prompt_submit(&self) -> bool {
        self.hook_event_name == USER_PROMPT_SUBMIT
    }
}
