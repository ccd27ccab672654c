//! Fixed word lists used by the summary heuristic.
//!
//! All lists are immutable process-wide data. Where a list is scanned for
//! the first match, its order is the tie-break and must not be changed.

use std::sync::OnceLock;

use regex::Regex;

/// Recognized action verbs. The first verb found as a substring of the
/// lowercased prompt wins, in this order.
pub const ACTION_VERBS: &[&str] = &[
    "fix",
    "debug",
    "research",
    "write",
    "create",
    "make",
    "build",
    "implement",
    "analyze",
    "review",
    "update",
    "modify",
    "generate",
    "develop",
    "design",
    "test",
    "deploy",
    "configure",
    "setup",
    "install",
    "remove",
    "delete",
    "add",
    "check",
    "verify",
    "validate",
    "optimize",
    "refactor",
    "enhance",
    "improve",
    "send",
    "email",
    "help",
];

/// Function words dropped during tokenization (compared lowercase).
///
/// Greetings are included so that a bare "hello" never becomes a topic.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "but", "for", "are", "with", "his", "her", "this", "that", "you", "can",
    "will", "have", "been", "your", "from", "they", "were", "said", "what", "them", "just",
    "told", "hello", "hey",
];

/// Meta words that describe the request rather than its subject.
pub const SKIP_WORDS: &[&str] = &[
    "user",
    "prompt",
    "thing",
    "says",
    "responding",
    "greeting",
    "properly",
    "interpreting",
    "section",
    "those",
    "things",
    "some",
    "that",
    "have",
    "your",
    "need",
    "dynamically",
    "respond",
    "describing",
    "exactly",
    "doing",
    "basically",
    "words",
    "static",
    "fucking",
    "line",
    "told",
    "just",
];

/// Ordered contextual rules used when no action verb matched.
/// Each rule fires if the lowercased prompt contains any of its keywords.
pub const CONTEXT_RULES: &[(&[&str], &str)] = &[
    (&["hook", "static", "dynamic"], "fixing"),
    (&["?"], "answering"),
    (&["greeting", "hello", "hi"], "responding"),
];

/// Action used when neither a verb nor a contextual rule matched.
pub const DEFAULT_ACTION: &str = "handling";

/// Maximum number of topic words in a summary.
pub const MAX_TOPICS: usize = 3;

const FALLBACK_STOP_PATTERN: &str = r"(?i)^(the|and|but|for|are|with|his|her|this|that|you|can|will|have|been|your|from|they|were|said|what|them|some|those|thing|says|just|told|fucking|hello|hey)$";

static FALLBACK_STOP: OnceLock<Regex> = OnceLock::new();

/// Stop set applied to raw prompt tokens during fallback topic extraction.
pub fn fallback_stop() -> &'static Regex {
    FALLBACK_STOP
        .get_or_init(|| Regex::new(FALLBACK_STOP_PATTERN).expect("static regex compile"))
}

/// Whether `word` is a stop word, ignoring case.
pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

/// Whether `word` is a skip word, ignoring case.
pub fn is_skip_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    SKIP_WORDS.contains(&lower.as_str())
}

/// Whether `word` is one of the recognized action verbs, ignoring case.
pub fn is_action_verb(word: &str) -> bool {
    let lower = word.to_lowercase();
    ACTION_VERBS.contains(&lower.as_str())
}
