//! Command-line interface layer.
//!
//! Separate from `core` so the resolver and discovery can be used as a
//! library without any terminal output.

mod args;
mod commands;
mod context;
mod exit_status;
mod report;

use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs, InitCommand, OutputFormat};
pub use context::LocalizationContext;
pub use exit_status::ExitStatus;

use commands::{discover::discover, init::init, resolve::resolve};

/// Run the parsed command line.
///
/// # Returns
/// - `Ok(ExitStatus)` describing whether anything was produced
/// - `Err` if the command could not run (config or resource errors)
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Discover(cmd)) => discover(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
