//! Conversational task summary generation.
//!
//! The heuristic picks a dominant action verb, inflects it to the
//! progressive form and appends up to three topic words, then adds a
//! conversational suffix. It never fails and never returns an empty string.

use tracing::debug;

use crate::words::{
    fallback_stop, is_action_verb, is_skip_word, is_stop_word, ACTION_VERBS, CONTEXT_RULES,
    DEFAULT_ACTION, MAX_TOPICS,
};

/// Generate a short "what I'm doing" phrase for a user request.
///
/// Deterministic: the same prompt always yields the same summary.
pub fn generate_task_summary(prompt: &str) -> String {
    let cleaned = normalize(prompt);
    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|w| w.len() > 2 && !is_stop_word(w))
        .collect();

    let lower_prompt = prompt.to_lowercase();

    let action_word = match detect_action(&lower_prompt) {
        Some(verb) => progressive(verb),
        None => infer_action(&lower_prompt).to_string(),
    };
    let stem = action_word.replacen("ing", "", 1);

    let topics: Vec<String> = words
        .iter()
        .filter(|w| is_topic(w, &stem))
        .take(MAX_TOPICS)
        .map(|w| w.to_lowercase())
        .collect();

    let mut parts = vec![action_word];
    if topics.is_empty() {
        parts.extend(fallback_topics(prompt));
    } else {
        parts.extend(topics.iter().cloned());
    }

    let mut summary = parts
        .iter()
        .flat_map(|p| p.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");

    if !summary.contains("for you") && !summary.contains("that") && !summary.contains("this") {
        if topics.is_empty() {
            summary.push_str(" that for you");
        } else {
            summary.push_str(" for you");
        }
    }

    debug!(summary = %summary, topics = topics.len(), "Generated task summary");
    summary
}

/// Convert a base verb to its progressive (-ing) form.
pub fn progressive(verb: &str) -> String {
    match verb {
        "fix" => "fixing".to_string(),
        "debug" => "debugging".to_string(),
        _ if verb.ends_with('e') => format!("{}ing", &verb[..verb.len() - 1]),
        _ if verb.ends_with("ing") => verb.to_string(),
        _ => format!("{verb}ing"),
    }
}

/// Replace everything except ASCII word characters and whitespace with a space.
fn normalize(prompt: &str) -> String {
    prompt
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// First action verb (in list order) appearing anywhere in the prompt.
fn detect_action(lower_prompt: &str) -> Option<&'static str> {
    ACTION_VERBS
        .iter()
        .copied()
        .find(|verb| lower_prompt.contains(verb))
}

/// Progressive action inferred from context when no verb matched.
fn infer_action(lower_prompt: &str) -> &'static str {
    CONTEXT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower_prompt.contains(k)))
        .map(|(_, action)| *action)
        .unwrap_or(DEFAULT_ACTION)
}

fn is_topic(word: &str, stem: &str) -> bool {
    let lower = word.to_lowercase();
    !is_action_verb(&lower) && !is_skip_word(&lower) && !lower.contains(stem) && word.len() > 2
}

/// Topic words taken from the raw, unnormalized prompt.
fn fallback_topics(prompt: &str) -> Vec<String> {
    let stop = fallback_stop();
    prompt
        .split_whitespace()
        .filter(|w| w.chars().count() > 3 && !stop.is_match(w))
        .take(MAX_TOPICS)
        .map(|w| w.to_lowercase())
        .collect()
}
