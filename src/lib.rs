//! `stacklog` - Bounded, allocation-free line logging.
//!
//! Each log call formats one line into a fixed-size stack buffer and hands it
//! to an output in a single write. Lines that don't fit are truncated, never
//! reallocated. A line is built from up to four fields, in this order:
//!
//! ```text
//! 12-23 12:34:56.789  9876  5432 I app.NET connect@net.rs:42 connected to 10.0.0.1
//! |------------ context -------------| |tag-| |--- source ---| |--- message ---|
//! ```
//!
//! Levels below the compile-time minimum (cargo features `min_level_*`) or
//! the runtime output level cost a comparison and nothing else: arguments are
//! not evaluated.
//!
//! # Example
//!
//! ```
//! use stacklog::{FieldMask, LevelFilter};
//!
//! stacklog::set_tag_prefix("app");
//! stacklog::set_output_level(LevelFilter::Debug);
//!
//! stacklog::info!(tag: "MAIN", "application started");
//! stacklog::debug!(tag: "NET", mem: b"\x01\x02hello", "received {} bytes", 7);
//! stacklog::secret! {
//!     stacklog::verbose!("token: {}", "abc123");
//! }
//! # let _ = FieldMask::default();
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `stacklog` command-line tool
//! - `min_level_verbose` .. `min_level_fatal`, `min_level_off`: compile-time
//!   minimum level. The most restrictive one enabled wins.
//! - `censored` / `uncensored`: force [`secret!`] bodies off or on. Release
//!   builds are censored by default.

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod line;
pub mod logger;
mod macros;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{FieldMask, SourceStyle};
pub use level::{
    AtomicLevelFilter, CENSORED, Level, LevelFilter, STATIC_MIN_LEVEL, output_enabled,
};
pub use line::LineBuffer;
pub use logger::global::{
    flush, output_level, set_clock, set_mem_width, set_output, set_output_file,
    set_output_level, set_output_spec, set_process_info, set_source_style, set_tag_prefix,
    spec as global_spec, tag_prefix,
};
pub use logger::{FormatSpec, LogSpec, LogSpecBuilder, ModuleLog, Record};
pub use output::{FileOutput, FnOutput, Message, Output, OutputSpec, StderrOutput, from_fn};

#[cfg(unix)]
pub use output::SyslogOutput;

/// Items the exported macros expand to. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::fmt::Location;
    pub use crate::fmt::source::function_name;
    pub use crate::logger::Record;

    /// Routes a record to an aux spec when one was given, else the global one.
    #[inline]
    pub fn dispatch(spec: Option<&crate::LogSpec>, record: &Record<'_>) {
        match spec {
            Some(spec) => spec.log(record),
            None => crate::logger::global::log(record),
        }
    }
}
