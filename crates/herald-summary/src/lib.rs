//! Task-summary heuristic for prompt-herald.
//!
//! Turns a free-form user request into a short progressive-tense phrase
//! such as `"fixing authentication bug login for you"`.
//!
//! # Example
//!
//! ```rust
//! use herald_summary::{compose_message, generate_task_summary};
//!
//! let summary = generate_task_summary("Can you fix the authentication bug in login.ts?");
//! assert_eq!(summary, "fixing authentication bug login for you");
//!
//! let message = compose_message("Got it, I'm", &summary);
//! assert_eq!(message, "Got it, I'm, fixing authentication bug login for you");
//! ```

pub mod greeting;
pub mod summary;
pub mod words;

pub use greeting::{compose_message, pick_greeting, pick_greeting_with, GREETINGS};
pub use summary::{generate_task_summary, progressive};
pub use words::{ACTION_VERBS, SKIP_WORDS, STOP_WORDS};
