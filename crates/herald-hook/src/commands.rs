//! Command implementations for the hook binary.
//!
//! Flow: read event -> generate summary -> (optionally) notify -> exit code.
//! Input failures are fatal; notification failures are logged and swallowed.

use anyhow::{Context, Result};
use tokio::io::AsyncRead;
use tracing::{debug, info};

use herald_client::Notifier;
use herald_summary::{compose_message, generate_task_summary, pick_greeting};
use herald_types::Settings;

use crate::cli::Cli;
use crate::error::InputError;
use crate::input::read_event;

/// Exit code for a completed run.
pub const EXIT_OK: i32 = 0;

/// Exit code when the input could not be read or parsed.
pub const EXIT_INPUT_ERROR: i32 = 1;

/// Result of a completed hook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Session the event belonged to
    pub session_id: String,
    /// Generated task summary
    pub summary: String,
    /// Whether a notification was dispatched
    pub notified: bool,
}

/// Load settings and apply CLI overrides (highest precedence).
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    apply_overrides(&mut settings, cli);
    settings
        .validate()
        .context("Invalid configuration after CLI overrides")?;
    Ok(settings)
}

/// Apply CLI flags on top of loaded settings.
pub fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(log_level) = &cli.log_level {
        settings.log_level = log_level.clone();
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        settings.input_timeout_ms = timeout_ms;
    }
    if cli.notify {
        settings.notify.enabled = true;
    }
    if let Some(endpoint) = &cli.endpoint {
        settings.notify.endpoint = endpoint.clone();
    }
}

/// Install the tracing subscriber. Output goes to stderr only.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Process one trigger event from `reader`.
///
/// When notifications are enabled, the summary is prefixed with a random
/// greeting and handed to `notifier`. Delivery problems never fail the run.
pub async fn run_hook<R>(
    reader: R,
    settings: &Settings,
    notifier: &dyn Notifier,
) -> Result<RunOutcome, InputError>
where
    R: AsyncRead + Unpin,
{
    let event = read_event(reader, settings.input_timeout()).await?;
    debug!(
        session_id = %event.session_id,
        hook_event = %event.hook_event_name,
        transcript = %event.transcript_path,
        "Received trigger event"
    );
    if !event.is_prompt_submit() {
        debug!(
            hook_event = %event.hook_event_name,
            "Not a prompt submit event; summarizing anyway"
        );
    }

    let summary = generate_task_summary(&event.prompt);

    let notified = if settings.notify.enabled {
        let message = compose_message(pick_greeting(), &summary);
        let payload = settings.notify.payload(message);
        notifier.dispatch(&payload).await;
        true
    } else {
        debug!("Notifications disabled; skipping dispatch");
        false
    };

    info!(session_id = %event.session_id, summary = %summary, notified, "Hook run complete");

    Ok(RunOutcome {
        session_id: event.session_id,
        summary,
        notified,
    })
}

/// Map a run result to the process exit code.
pub fn exit_code<T>(result: &Result<T, InputError>) -> i32 {
    match result {
        Ok(_) => EXIT_OK,
        Err(_) => EXIT_INPUT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use clap::Parser;
    use herald_summary::GREETINGS;
    use herald_types::{NotificationPayload, Priority};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Notifier that records payloads instead of sending them.
    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<NotificationPayload>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn dispatch(&self, payload: &NotificationPayload) {
            self.sent.lock().unwrap().push(payload.clone());
        }
    }

    const INPUT: &str = r#"{"session_id":"s-42","prompt":"Can you fix the authentication bug in login.ts?","transcript_path":"/tmp/t.jsonl","hook_event_name":"UserPromptSubmit"}"#;

    #[tokio::test]
    async fn test_run_without_notify() {
        let settings = Settings::default();
        let notifier = RecordingNotifier::default();

        let result = run_hook(INPUT.as_bytes(), &settings, &notifier).await;
        assert_eq!(exit_code(&result), EXIT_OK);

        let outcome = result.unwrap();
        assert_eq!(outcome.session_id, "s-42");
        assert_eq!(outcome.summary, "fixing authentication bug login for you");
        assert!(!outcome.notified);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_with_notify_sends_one_payload() {
        let mut settings = Settings::default();
        settings.notify.enabled = true;
        let notifier = RecordingNotifier::default();

        let outcome = run_hook(INPUT.as_bytes(), &settings, &notifier)
            .await
            .unwrap();
        assert!(outcome.notified);

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let payload = &sent[0];
        assert_eq!(payload.title, "Sol");
        assert_eq!(payload.priority, Some(Priority::Low));
        assert!(payload
            .message
            .ends_with(", fixing authentication bug login for you"));
        assert!(GREETINGS.iter().any(|g| payload.message.starts_with(g)));
    }

    #[tokio::test]
    async fn test_malformed_input_exits_one() {
        let settings = Settings::default();
        let notifier = RecordingNotifier::default();

        let result = run_hook(&b"{broken"[..], &settings, &notifier).await;
        assert!(matches!(result, Err(InputError::MalformedInput(_))));
        assert_eq!(exit_code(&result), EXIT_INPUT_ERROR);
    }

    #[tokio::test]
    async fn test_timeout_exits_one() {
        let settings = Settings {
            input_timeout_ms: 30,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let (_writer, reader) = tokio::io::duplex(64);

        let result = run_hook(reader, &settings, &notifier).await;
        assert!(matches!(result, Err(InputError::Timeout(d)) if d == Duration::from_millis(30)));
        assert_eq!(exit_code(&result), EXIT_INPUT_ERROR);
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from([
            "herald-hook",
            "--timeout-ms",
            "750",
            "--notify",
            "--endpoint",
            "http://127.0.0.1:1234/notify",
            "--log-level",
            "debug",
        ]);
        let mut settings = Settings::default();
        apply_overrides(&mut settings, &cli);

        assert_eq!(settings.input_timeout_ms, 750);
        assert!(settings.notify.enabled);
        assert_eq!(settings.notify.endpoint, "http://127.0.0.1:1234/notify");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_overrides_leave_unset_fields_alone() {
        let cli = Cli::parse_from(["herald-hook"]);
        let mut settings = Settings::default();
        apply_overrides(&mut settings, &cli);

        assert_eq!(settings.input_timeout_ms, 5000);
        assert!(!settings.notify.enabled);
    }
}
