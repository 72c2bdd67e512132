//! Scriptable front end to the library: every line goes through the same
//! formatting and outputs an application would use.
//!
//! Usage:
//!   stacklog log <level> [--tag T] <message..>          Log a message
//!   stacklog dump <level> <path> [--tag T] [message..]  Log a file's bytes
//!
//! Global flags: --config, --output-level, --tag-prefix, --mem-width,
//! --fields, --file

use clap::Parser;
use stacklog::cli::{Cli, Command, cmd_dump, cmd_log};
use stacklog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = cli.setup() {
        internal::error(format_args!("setup failed: {e}"));
        return ExitCode::FAILURE;
    }

    let code = match &cli.command {
        Command::Log {
            level,
            tag,
            message,
        } => cmd_log((*level).into(), tag.as_deref(), message),
        Command::Dump {
            level,
            path,
            tag,
            message,
        } => cmd_dump((*level).into(), path, tag.as_deref(), message),
    };
    let _ = stacklog::flush();
    code
}
