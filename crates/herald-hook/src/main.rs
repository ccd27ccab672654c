//! Prompt Herald hook
//!
//! Invoked by the agent host on `UserPromptSubmit`. Reads one JSON event
//! from stdin and derives a short "what I'm doing" summary of the request.
//!
//! # Usage
//!
//! ```bash
//! echo '{"session_id":"s","prompt":"fix the build","transcript_path":"t","hook_event_name":"UserPromptSubmit"}' | herald-hook
//! herald-hook summarize "Can you fix the authentication bug in login.ts?"
//! ```
//!
//! Exit code is 0 for a completed run and 1 when the input could not be
//! read or parsed in time. Diagnostics go to stderr; a hook run writes
//! nothing to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use herald_client::HttpNotifier;
use herald_hook::{exit_code, init_logging, load_settings, run_hook, Cli, Commands};
use herald_summary::{generate_task_summary, pick_greeting};

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("UserPromptSubmit hook error: {e:#}");
            1
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let settings = load_settings(&cli)?;
    init_logging(&settings.log_level)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Summarize { prompt } => {
            println!("{}", generate_task_summary(&prompt.join(" ")));
            Ok(0)
        }
        Commands::Greet => {
            println!("{}", pick_greeting());
            Ok(0)
        }
        Commands::Run => {
            let rt = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            let notifier = HttpNotifier::new(settings.notify.endpoint.clone());

            let result = rt.block_on(run_hook(tokio::io::stdin(), &settings, &notifier));
            if let Err(e) = &result {
                error!(error = %e, "UserPromptSubmit hook error");
            }

            // The stdin reader may still be parked on a blocking read after a
            // timeout; do not wait for it.
            rt.shutdown_background();
            Ok(exit_code(&result))
        }
    }
}
