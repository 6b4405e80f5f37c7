//! Command-line interface
//!
//! Subcommands for the connector lifecycle: `check` credentials, `discover`
//! the stream catalog, list `streams`, and `sync` records to stdout.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
