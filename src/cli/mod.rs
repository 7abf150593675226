//! Command-line interface layer.
//!
//! Thin plumbing around the engine: clap parses the arguments, `generate`
//! wires them into a policy plus run context, and the engine's outcome is
//! mapped onto a process exit status.

use anyhow::Result;

mod args;
mod exit_status;
mod generate;
mod init;

pub use args::{Arguments, Command, GenerateArgs, GenerateCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match args.with_command_or_help().and_then(|args| args.command) {
        Some(Command::Generate(cmd)) => generate::generate(cmd),
        Some(Command::Init) => init::init(),
        None => Ok(ExitStatus::Success),
    }
}
