//! Emit a single line, the way shell scripts use the tool.

use crate::level::Level;
use std::process::ExitCode;

/// Fatal never returns: the line is written and the process aborts.
#[must_use]
pub fn cmd_log(level: Level, tag: Option<&str>, message: &[String]) -> ExitCode {
    let message = message.join(" ");
    match tag {
        Some(tag) => crate::log!(level, tag: tag, "{message}"),
        None => crate::log!(level, "{message}"),
    }
    ExitCode::SUCCESS
}
