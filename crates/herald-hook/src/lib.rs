//! Prompt Herald hook library.
//!
//! Exports CLI types, input acquisition and the run pipeline used by the
//! `herald-hook` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;

pub use cli::{Cli, Commands};
pub use commands::{
    apply_overrides, exit_code, init_logging, load_settings, run_hook, RunOutcome,
    EXIT_INPUT_ERROR, EXIT_OK,
};
pub use error::InputError;
pub use input::{parse_event, read_event, DEFAULT_TIMEOUT, MAX_INPUT_BYTES};
