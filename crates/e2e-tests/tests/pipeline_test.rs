//! Pipeline E2E tests: hook input -> summary -> notification server.

use pretty_assertions::assert_eq;

use e2e_tests::{hook_input, TestHarness};
use herald_hook::{exit_code, run_hook, EXIT_OK};
use herald_summary::GREETINGS;
use herald_types::Priority;

#[tokio::test]
async fn test_prompt_to_notification() {
    let harness = TestHarness::new().await;
    let notifier = harness.notifier();
    let input = hook_input("session-1", "Can you fix the authentication bug in login.ts?");

    let result = run_hook(input.as_bytes(), &harness.settings, &notifier).await;
    assert_eq!(exit_code(&result), EXIT_OK);

    let outcome = result.unwrap();
    assert_eq!(outcome.summary, "fixing authentication bug login for you");
    assert!(outcome.notified);

    let payloads = harness.received_payloads().await;
    assert_eq!(payloads.len(), 1);

    let payload = &payloads[0];
    assert_eq!(payload.title, "Sol");
    assert_eq!(payload.voice_id, "jqcCZkN6Knx8BJ5TBdYR");
    assert_eq!(payload.priority, Some(Priority::Low));
    assert!(payload.voice_enabled);

    let (greeting, summary) = payload
        .message
        .rsplit_once(", ")
        .expect("message should be '<greeting>, <summary>'");
    assert!(GREETINGS.contains(&greeting), "unexpected greeting {greeting:?}");
    assert_eq!(summary, "fixing authentication bug login for you");
}

#[tokio::test]
async fn test_disabled_notify_sends_nothing() {
    let mut harness = TestHarness::new().await;
    harness.settings.notify.enabled = false;
    let notifier = harness.notifier();
    let input = hook_input("session-2", "hello");

    let outcome = run_hook(input.as_bytes(), &harness.settings, &notifier)
        .await
        .unwrap();

    assert_eq!(outcome.summary, "responding that for you");
    assert!(!outcome.notified);
    assert!(harness.received_payloads().await.is_empty());
}

#[tokio::test]
async fn test_empty_prompt_still_notifies() {
    let harness = TestHarness::new().await;
    let notifier = harness.notifier();
    let input = hook_input("session-3", "");

    let outcome = run_hook(input.as_bytes(), &harness.settings, &notifier)
        .await
        .unwrap();
    assert_eq!(outcome.summary, "handling that for you");

    let payloads = harness.received_payloads().await;
    assert_eq!(payloads.len(), 1);
    assert!(payloads[0].message.ends_with(", handling that for you"));
}

#[tokio::test]
async fn test_payload_without_priority_omits_field() {
    let mut harness = TestHarness::new().await;
    harness.settings.notify.priority = None;
    let notifier = harness.notifier();
    let input = hook_input("session-4", "deploy the staging cluster");

    run_hook(input.as_bytes(), &harness.settings, &notifier)
        .await
        .unwrap();

    let requests = harness.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("priority").is_none());
    assert_eq!(body["voice_enabled"], true);
}
