//! Configuration loading for prompt-herald.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/prompt-herald/config.toml.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::HeraldError;
use crate::notification::{NotificationPayload, Priority};

/// Default notification server endpoint.
pub const DEFAULT_NOTIFY_ENDPOINT: &str = "http://localhost:8888/notify";

/// Notification dispatch settings.
///
/// Dispatch is DISABLED by default; the hook only computes the summary
/// unless this is explicitly turned on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifySettings {
    /// MUST be explicitly set to true to send notifications (default: false).
    #[serde(default)]
    pub enabled: bool,

    /// Notification server URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Title shown by the notification server
    #[serde(default = "default_title")]
    pub title: String,

    /// Voice used when speaking the message
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// Whether the server should speak the message
    #[serde(default = "default_voice_enabled")]
    pub voice_enabled: bool,

    /// Delivery priority (omitted from the payload when unset)
    #[serde(default = "default_priority")]
    pub priority: Option<Priority>,
}

fn default_endpoint() -> String {
    DEFAULT_NOTIFY_ENDPOINT.to_string()
}

fn default_title() -> String {
    "Sol".to_string()
}

fn default_voice_id() -> String {
    "jqcCZkN6Knx8BJ5TBdYR".to_string()
}

fn default_voice_enabled() -> bool {
    true
}

fn default_priority() -> Option<Priority> {
    Some(Priority::Low)
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
            title: default_title(),
            voice_id: default_voice_id(),
            voice_enabled: default_voice_enabled(),
            priority: default_priority(),
        }
    }
}

impl NotifySettings {
    /// Build the payload for a spoken message using these settings.
    pub fn payload(&self, message: impl Into<String>) -> NotificationPayload {
        let mut payload = NotificationPayload::new(&self.title, message, &self.voice_id)
            .with_voice_enabled(self.voice_enabled);
        if let Some(priority) = self.priority {
            payload = payload.with_priority(priority);
        }
        payload
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How long to wait for the input record before giving up (ms)
    #[serde(default = "default_input_timeout_ms")]
    pub input_timeout_ms: u64,

    /// Notification dispatch configuration
    #[serde(default)]
    pub notify: NotifySettings,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_input_timeout_ms() -> u64 {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            input_timeout_ms: default_input_timeout_ms(),
            notify: NotifySettings::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/prompt-herald/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (HERALD_*, nested keys joined by `__`)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, HeraldError> {
        let config_dir = ProjectDirs::from("", "", "prompt-herald")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| HeraldError::Config(e.to_string()))?
            .set_default("input_timeout_ms", default_input_timeout_ms() as i64)
            .map_err(|e| HeraldError::Config(e.to_string()))?
            .set_default("notify.enabled", false)
            .map_err(|e| HeraldError::Config(e.to_string()))?
            .set_default("notify.endpoint", default_endpoint())
            .map_err(|e| HeraldError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Format: HERALD_LOG_LEVEL, HERALD_INPUT_TIMEOUT_MS, HERALD_NOTIFY__ENABLED, etc.
        builder = builder.add_source(
            Environment::with_prefix("HERALD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| HeraldError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| HeraldError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), HeraldError> {
        if self.input_timeout_ms == 0 {
            return Err(HeraldError::Config(
                "input_timeout_ms must be > 0".to_string(),
            ));
        }
        if self.notify.endpoint.trim().is_empty() {
            return Err(HeraldError::Config(
                "notify.endpoint must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Input acquisition deadline.
    pub fn input_timeout(&self) -> Duration {
        Duration::from_millis(self.input_timeout_ms)
    }
}
