//! The formatting pipeline and the specs that drive it.
//!
//! A [`LogSpec`] bundles how lines look ([`FormatSpec`]) and where they go
//! ([`OutputSpec`]). The process-wide spec lives in [`global`]; a module that
//! wants its own output builds a `LogSpec` and passes it with `spec:` to the
//! logging macros.

mod builder;
pub mod global;
mod module;

pub use builder::LogSpecBuilder;
pub use module::ModuleLog;

use crate::fmt::{
    self, Clock, CurrentProcess, FieldMask, LocalClock, Location, ProcessInfo, SourceStyle, mem,
};
use crate::level::Level;
use crate::line::{DEFAULT_CAPACITY, LineBuffer, RESERVED_TAIL};
use crate::output::{Message, OutputSpec};
use std::io::Write;
use std::sync::Arc;

/// Everything one call site contributes.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub tag: Option<&'a str>,
    pub location: Option<Location<'a>>,
    pub args: std::fmt::Arguments<'a>,
    /// Bytes to dump after the message line.
    pub mem: Option<&'a [u8]>,
}

/// How lines are rendered.
#[derive(Clone)]
pub struct FormatSpec {
    /// Bytes per memory dump line.
    pub mem_width: usize,
    pub source_style: SourceStyle,
    pub clock: Arc<dyn Clock>,
    pub process: Arc<dyn ProcessInfo>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            mem_width: mem::DEFAULT_MEM_WIDTH,
            source_style: SourceStyle::default(),
            clock: Arc::new(LocalClock),
            process: Arc::new(CurrentProcess),
        }
    }
}

impl std::fmt::Debug for FormatSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatSpec")
            .field("mem_width", &self.mem_width)
            .field("source_style", &self.source_style)
            .finish_non_exhaustive()
    }
}

/// Format plus output. The tag prefix stays process-wide even for aux specs.
#[derive(Debug, Clone, Default)]
pub struct LogSpec {
    pub format: FormatSpec,
    pub output: OutputSpec,
}

impl LogSpec {
    #[must_use]
    pub fn builder() -> LogSpecBuilder {
        LogSpecBuilder::new()
    }

    /// Formats and dispatches `record` through this spec using a stack buffer.
    /// Level filtering is the caller's job (the macros do it).
    pub fn log(&self, record: &Record<'_>) {
        let prefix = global::tag_prefix();
        let mut storage = [0u8; DEFAULT_CAPACITY];
        self.write_with(&mut storage, RESERVED_TAIL, prefix.as_deref(), record);
    }

    /// Like [`log`](Self::log) over caller-supplied storage. Bytes past the
    /// rendered content are only touched by outputs that terminate the line.
    pub fn write_with(
        &self,
        storage: &mut [u8],
        reserved_tail: usize,
        prefix: Option<&str>,
        record: &Record<'_>,
    ) {
        let mut line = LineBuffer::new(storage, reserved_tail);
        render(&self.format, self.output.mask, prefix, record, &mut line);

        let output = &self.output.output;
        let _ = output.write(&mut Message::new(record.level, record.tag, &mut line));

        if let Some(data) = record.mem {
            mem::dump(&mut line, data, self.format.mem_width, |line| {
                let _ = output.write(&mut Message::new(record.level, record.tag, line));
            });
        }

        if record.level == Level::Fatal {
            let _ = output.flush();
            let _ = std::io::stderr().flush();
            std::process::abort();
        }
    }
}

/// Runs the field writers in their fixed order.
pub fn render(
    format: &FormatSpec,
    mask: FieldMask,
    prefix: Option<&str>,
    record: &Record<'_>,
    line: &mut LineBuffer<'_>,
) {
    if mask.contains(FieldMask::CONTEXT) {
        fmt::put_context(line, record.level, &*format.clock, &*format.process);
    }
    if mask.contains(FieldMask::TAG) {
        fmt::put_tag(line, prefix, record.tag);
    } else {
        let at = line.len();
        line.set_tag_span(at, at);
    }
    if mask.contains(FieldMask::SOURCE)
        && let Some(location) = &record.location
    {
        fmt::put_source(line, location, format.source_style);
    }
    line.mark_message();
    if mask.contains(FieldMask::MESSAGE) {
        fmt::put_message(line, record.args);
    }
}
