//! stacklog's own diagnostics, reported through the global pipeline under the
//! `stacklog` tag so they land wherever the application's lines land.
//!
//! These go through the same level gate as application records.

use crate::level::Level;
use crate::logger::{Record, global};
use std::fmt;

pub const TAG: &str = "stacklog";

#[track_caller]
fn log(level: Level, args: fmt::Arguments<'_>) {
    if !crate::level::output_enabled(level) {
        return;
    }
    let caller = std::panic::Location::caller();
    global::log(&Record {
        level,
        tag: Some(TAG),
        location: Some(crate::fmt::Location {
            function: TAG,
            file: caller.file(),
            line: caller.line(),
        }),
        args,
        mem: None,
    });
}

/// Setup details: directories created, config files read.
#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) {
    log(Level::Debug, args);
}

#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    log(Level::Info, args);
}

/// Recoverable setup failures, e.g. an output that could not be opened.
#[track_caller]
pub fn warn(args: fmt::Arguments<'_>) {
    log(Level::Warn, args);
}

#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    log(Level::Error, args);
}
