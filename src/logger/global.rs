//! Process-wide logging configuration.
//!
//! Reads on the logging path are a relaxed atomic load for the output level
//! and one short read lock to clone the current spec. Setters take effect for
//! calls that start afterwards; concurrent calls may still see the old values.
//! Configure during startup or quiet periods.

use super::{LogSpec, Record};
use crate::fmt::{Clock, FieldMask, ProcessInfo, SourceStyle};
use crate::internal;
use crate::level::{AtomicLevelFilter, LevelFilter};
use crate::line::{DEFAULT_CAPACITY, RESERVED_TAIL};
use crate::output::{FileOutput, Output, OutputSpec};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::{Arc, LazyLock};

/// All mutable global state in one place.
struct LoggerConfig {
    output_level: AtomicLevelFilter,
    shared: RwLock<Shared>,
}

#[derive(Default)]
struct Shared {
    tag_prefix: Option<Arc<str>>,
    spec: LogSpec,
}

static CONFIG: LazyLock<LoggerConfig> = LazyLock::new(|| LoggerConfig {
    output_level: AtomicLevelFilter::new(LevelFilter::Verbose),
    shared: RwLock::new(Shared::default()),
});

/// Runtime threshold. Levels below the compile-time minimum stay disabled
/// whatever this is set to.
pub fn set_output_level(level: LevelFilter) {
    CONFIG.output_level.set(level);
}

#[must_use]
pub fn output_level() -> LevelFilter {
    CONFIG.output_level.get()
}

/// Prefix joined to every tag with a dot. Empty disables it.
pub fn set_tag_prefix(prefix: &str) {
    CONFIG.shared.write().tag_prefix = (!prefix.is_empty()).then(|| Arc::from(prefix));
}

#[must_use]
pub fn tag_prefix() -> Option<Arc<str>> {
    CONFIG.shared.read().tag_prefix.clone()
}

/// Bytes per memory dump line.
pub fn set_mem_width(width: usize) {
    CONFIG.shared.write().spec.format.mem_width = width;
}

pub fn set_source_style(style: SourceStyle) {
    CONFIG.shared.write().spec.format.source_style = style;
}

/// Replaces the time source for the context field.
pub fn set_clock(clock: Arc<dyn Clock>) {
    CONFIG.shared.write().spec.format.clock = clock;
}

/// Replaces the pid/tid source for the context field.
pub fn set_process_info(process: Arc<dyn ProcessInfo>) {
    CONFIG.shared.write().spec.format.process = process;
}

/// Installs `output` with field selection `mask`. The previous output is dropped
/// once in-flight calls finish with it.
pub fn set_output(mask: FieldMask, output: impl Output + 'static) {
    set_output_spec(OutputSpec::new(mask, output));
}

pub fn set_output_spec(spec: OutputSpec) {
    CONFIG.shared.write().spec.output = spec;
}

/// Switches the global output to a file, keeping the current field mask.
///
/// # Errors
/// When the file can't be opened the failure is logged as a warning, the
/// current output stays installed, and the error is returned.
pub fn set_output_file(path: impl AsRef<Path>) -> Result<(), crate::Error> {
    match FileOutput::open(path.as_ref()) {
        Ok(output) => {
            let mask = CONFIG.shared.read().spec.output.mask;
            set_output(mask, output);
            Ok(())
        }
        Err(e) => {
            internal::warn(format_args!("failed to open log file: {e}"));
            Err(e)
        }
    }
}

/// Snapshot of the current global spec.
#[must_use]
pub fn spec() -> LogSpec {
    CONFIG.shared.read().spec.clone()
}

/// Flushes the global output.
///
/// # Errors
/// I/O error from the output.
pub fn flush() -> Result<(), crate::Error> {
    spec().output.output.flush()
}

/// Entry point for the macros once the level gate has passed.
pub(crate) fn log(record: &Record<'_>) {
    let (prefix, spec) = {
        let shared = CONFIG.shared.read();
        (shared.tag_prefix.clone(), shared.spec.clone())
    };
    let mut storage = [0u8; DEFAULT_CAPACITY];
    spec.write_with(&mut storage, RESERVED_TAIL, prefix.as_deref(), record);
}
