//! Spoken lead-ins for the notification message.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Fixed, ordered list of greeting lead-ins.
pub const GREETINGS: [&str; 10] = [
    "Okay, I'm",
    "Sure thing, I'm",
    "Got it, I'm",
    "Alright, I'm",
    "On it, I'm",
    "Absolutely, I'm",
    "Right away, I'm",
    "Perfect, I'm",
    "Sounds good, I'm",
    "Will do, I'm",
];

/// Pick a greeting uniformly at random using the thread-local RNG.
pub fn pick_greeting() -> &'static str {
    pick_greeting_with(&mut rand::rng())
}

/// Pick a greeting uniformly at random from the given RNG.
pub fn pick_greeting_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS.choose(rng).copied().unwrap_or(GREETINGS[0])
}

/// Join a greeting and a task summary into the spoken message.
pub fn compose_message(greeting: &str, summary: &str) -> String {
    format!("{greeting}, {summary}")
}
