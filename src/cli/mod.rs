//! CLI module
//!
//! Provides command-line interface for:
//! - init: Create the database file and table
//! - serve: Open the database and serve HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
