//! Hex dump of a file's contents under a message line.

use crate::internal;
use crate::level::Level;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_dump(level: Level, path: &Path, tag: Option<&str>, message: &[String]) -> ExitCode {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            internal::error(format_args!("failed to read {}: {e}", path.display()));
            return ExitCode::FAILURE;
        }
    };

    let message = if message.is_empty() {
        path.display().to_string()
    } else {
        message.join(" ")
    };
    match tag {
        Some(tag) => crate::log!(level, tag: tag, mem: data, "{message}"),
        None => crate::log!(level, mem: data, "{message}"),
    }
    ExitCode::SUCCESS
}
