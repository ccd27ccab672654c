//! Outbound notification payload.

use serde::{Deserialize, Serialize};

use crate::error::HeraldError;

/// Delivery priority understood by the notification server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Normal,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Normal => write!(f, "normal"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = HeraldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            other => Err(HeraldError::InvalidInput(format!(
                "unknown priority '{other}' (expected low, normal or high)"
            ))),
        }
    }
}

/// Body of a notify request. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub message: String,
    pub voice_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub voice_id: String,
}

impl NotificationPayload {
    /// Create a payload with voice enabled and no priority.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        voice_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            voice_enabled: true,
            priority: None,
            voice_id: voice_id.into(),
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Enable or disable voice playback.
    pub fn with_voice_enabled(mut self, enabled: bool) -> Self {
        self.voice_enabled = enabled;
        self
    }

    /// Encode as the JSON request body.
    pub fn to_json(&self) -> Result<String, HeraldError> {
        Ok(serde_json::to_string(self)?)
    }
}
