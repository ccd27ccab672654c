//! CLI argument parsing for the hook binary.
//!
//! CLI flags override all other config sources.

use clap::{Parser, Subcommand};

/// Prompt Herald hook
///
/// Reads a UserPromptSubmit event from stdin and derives a short
/// "what I'm doing" summary of the request.
#[derive(Parser, Debug)]
#[command(name = "herald-hook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/prompt-herald/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Override the stdin read deadline in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Send the summary to the notification server
    #[arg(long, global = true)]
    pub notify: bool,

    /// Override the notification server URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Hook commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Read one trigger event from stdin and process it
    Run,

    /// Print the task summary for a prompt
    Summarize {
        /// Prompt text (joined with spaces)
        prompt: Vec<String>,
    },

    /// Print a random greeting lead-in
    Greet,
}
