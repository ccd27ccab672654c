//! End-to-end test infrastructure for prompt-herald.
//!
//! Provides a shared TestHarness that runs a mock notification server and
//! helpers for building hook input records.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use herald_client::HttpNotifier;
use herald_types::{NotificationPayload, Settings, TriggerEvent, USER_PROMPT_SUBMIT};

/// Shared test harness for E2E tests.
///
/// Owns a mock notification server and settings pointing at it with
/// dispatch enabled.
pub struct TestHarness {
    /// Mock notification server
    pub server: MockServer,
    /// Settings targeting the mock server
    pub settings: Settings,
}

impl TestHarness {
    /// Start a mock server that answers every notify request with `status`.
    pub async fn with_status(status: u16) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/notify"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let mut settings = Settings::default();
        settings.notify.enabled = true;
        settings.notify.endpoint = format!("{}/notify", server.uri());
        settings.input_timeout_ms = 1000;

        Self { server, settings }
    }

    /// Start a mock server that accepts every notify request.
    pub async fn new() -> Self {
        Self::with_status(200).await
    }

    /// Notifier pointed at the mock server.
    pub fn notifier(&self) -> HttpNotifier {
        HttpNotifier::new(self.settings.notify.endpoint.clone())
    }

    /// Payloads the mock server has received, in order.
    pub async fn received_payloads(&self) -> Vec<NotificationPayload> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| serde_json::from_slice(&req.body).expect("Invalid payload JSON"))
            .collect()
    }
}

/// Serialize a UserPromptSubmit record for the given prompt.
pub fn hook_input(session_id: &str, prompt: &str) -> String {
    let event = TriggerEvent::new(
        session_id,
        prompt,
        format!("/tmp/{session_id}.jsonl"),
        USER_PROMPT_SUBMIT,
    );
    serde_json::to_string(&event).expect("Failed to serialize event")
}
