//! Trigger event acquisition.
//!
//! Reads the whole input stream within a fixed deadline and parses it as a
//! single JSON record. Whichever of "stream closed" and "timer fired"
//! resolves first wins.

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use herald_types::TriggerEvent;

use crate::error::InputError;

/// Largest accepted input record.
pub const MAX_INPUT_BYTES: u64 = 1024 * 1024;

/// Default stdin deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Read and parse one trigger event from `reader`.
///
/// # Errors
///
/// - `InputError::Timeout` if the stream is still open after `timeout`
/// - `InputError::MalformedInput` if the bytes are not a complete record
///   or exceed [`MAX_INPUT_BYTES`]
/// - `InputError::Io` if reading fails
pub async fn read_event<R>(reader: R, timeout: Duration) -> Result<TriggerEvent, InputError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let mut limited = reader.take(MAX_INPUT_BYTES + 1);

    match tokio::time::timeout(timeout, limited.read_to_end(&mut buf)).await {
        Ok(Ok(n)) => debug!(bytes = n, "Input stream closed"),
        Ok(Err(e)) => return Err(InputError::Io(e)),
        Err(_) => return Err(InputError::Timeout(timeout)),
    }

    if buf.len() as u64 > MAX_INPUT_BYTES {
        return Err(InputError::MalformedInput(format!(
            "input exceeds {MAX_INPUT_BYTES} bytes"
        )));
    }

    parse_event(&buf)
}

/// Parse a complete input record.
pub fn parse_event(bytes: &[u8]) -> Result<TriggerEvent, InputError> {
    serde_json::from_slice(bytes).map_err(|e| InputError::MalformedInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio::io::AsyncWriteExt;

    const VALID: &str = r#"{"session_id":"s-1","prompt":"fix the build","transcript_path":"/tmp/t.jsonl","hook_event_name":"UserPromptSubmit"}"#;

    #[tokio::test]
    async fn test_reads_until_eof() {
        let (mut writer, reader) = tokio::io::duplex(8192);
        writer.write_all(VALID.as_bytes()).await.unwrap();
        drop(writer);

        let event = read_event(reader, Duration::from_secs(1)).await.unwrap();
        assert_eq!(event.session_id, "s-1");
        assert_eq!(event.prompt, "fix the build");
    }

    #[tokio::test]
    async fn test_reads_from_slice() {
        let input = format!("  {VALID}\n");
        let event = read_event(input.as_bytes(), DEFAULT_TIMEOUT).await.unwrap();
        assert_eq!(event.hook_event_name, "UserPromptSubmit");
    }

    #[tokio::test]
    async fn test_open_stream_times_out_at_deadline() {
        let (_writer, reader) = tokio::io::duplex(64);
        let timeout = Duration::from_millis(100);

        let start = Instant::now();
        let err = read_event(reader, timeout).await.unwrap_err();
        let elapsed = start.elapsed();

        assert!(matches!(err, InputError::Timeout(d) if d == timeout));
        assert!(elapsed >= timeout, "fired early: {elapsed:?}");
        assert!(elapsed < Duration::from_secs(2), "fired late: {elapsed:?}");
    }

    #[tokio::test]
    async fn test_complete_record_on_open_stream_still_times_out() {
        let (mut writer, reader) = tokio::io::duplex(8192);
        writer.write_all(VALID.as_bytes()).await.unwrap();

        let err = read_event(reader, Duration::from_millis(50)).await.unwrap_err();
        assert!(matches!(err, InputError::Timeout(_)));
        drop(writer);
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let err = read_event(&b"not json"[..], DEFAULT_TIMEOUT).await.unwrap_err();
        assert!(matches!(err, InputError::MalformedInput(_)));
    }

    #[tokio::test]
    async fn test_empty_input_is_malformed() {
        let err = read_event(&b""[..], DEFAULT_TIMEOUT).await.unwrap_err();
        assert!(matches!(err, InputError::MalformedInput(_)));
    }

    #[tokio::test]
    async fn test_missing_field_is_malformed() {
        let input = br#"{"session_id":"s-1","prompt":"hi","hook_event_name":"UserPromptSubmit"}"#;
        let err = read_event(&input[..], DEFAULT_TIMEOUT).await.unwrap_err();
        match err {
            InputError::MalformedInput(msg) => assert!(msg.contains("transcript_path"), "{msg}"),
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_oversized_input_is_rejected() {
        let input = vec![b' '; MAX_INPUT_BYTES as usize + 16];
        let err = read_event(&input[..], DEFAULT_TIMEOUT).await.unwrap_err();
        match err {
            InputError::MalformedInput(msg) => assert!(msg.contains("exceeds")),
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_event_wrong_type() {
        let input = br#"{"session_id":1,"prompt":"hi","transcript_path":"t","hook_event_name":"x"}"#;
        assert!(matches!(
            parse_event(input),
            Err(InputError::MalformedInput(_))
        ));
    }
}
