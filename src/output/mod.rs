//! Outputs receive each finished line. The built-in ones (stderr, file, syslog)
//! can't cover every target, so the `Output` trait is public.

mod file;
mod stderr;
#[cfg(unix)]
pub mod syslog;

pub use file::FileOutput;
pub use stderr::StderrOutput;
#[cfg(unix)]
pub use syslog::SyslogOutput;

use crate::fmt::FieldMask;
use crate::level::Level;
use crate::line::LineBuffer;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A finished line as seen by an output.
///
/// Reading is free; outputs may also rewrite the content in place or append a
/// terminator into the reserved tail, but cannot grow the line.
pub struct Message<'m, 'b> {
    level: Level,
    tag: Option<&'m str>,
    line: &'m mut LineBuffer<'b>,
}

impl<'m, 'b> Message<'m, 'b> {
    pub(crate) const fn new(level: Level, tag: Option<&'m str>, line: &'m mut LineBuffer<'b>) -> Self {
        Self { level, tag, line }
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// The per-call tag, without the process-wide prefix.
    #[must_use]
    pub const fn raw_tag(&self) -> Option<&str> {
        self.tag
    }

    /// The whole line.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// The whole line, lossily decoded. Truncation can split a UTF-8 sequence.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.line.as_bytes())
    }

    /// Prefixed tag as rendered, empty when the tag field is off.
    #[must_use]
    pub fn tag(&self) -> &[u8] {
        self.line.tag()
    }

    /// Tag, source and message, without the context field.
    #[must_use]
    pub fn from_tag(&self) -> &[u8] {
        self.line.from_tag()
    }

    /// Context, tag and source fields.
    #[must_use]
    pub fn header(&self) -> &[u8] {
        self.line.header()
    }

    /// Message text, or the dump columns on memory lines.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        self.line.message()
    }

    /// In-place access for outputs that rewrite content.
    #[must_use]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        self.line.as_mut_bytes()
    }

    /// Line plus `eol`, written into the reserved tail.
    pub fn terminate(&mut self, eol: &[u8]) -> &[u8] {
        self.line.terminate(eol)
    }
}

impl fmt::Debug for Message<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("level", &self.level)
            .field("tag", &self.tag)
            .field("text", &self.text())
            .finish()
    }
}

/// `Send + Sync` because one output serves every thread; outputs doing
/// blocking I/O bring their own locking.
pub trait Output: Send + Sync {
    /// Consumes one line.
    ///
    /// # Errors
    /// I/O errors from the underlying sink. Dispatch drops them.
    fn write(&self, msg: &mut Message<'_, '_>) -> Result<(), crate::Error>;

    /// Called before a fatal abort and by [`crate::flush`].
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

/// Closure adapter, see [`from_fn`].
pub struct FnOutput<F>(F);

impl<F> Output for FnOutput<F>
where
    F: Fn(&mut Message<'_, '_>) + Send + Sync,
{
    fn write(&self, msg: &mut Message<'_, '_>) -> Result<(), crate::Error> {
        (self.0)(msg);
        Ok(())
    }
}

/// Wraps a closure as an output.
pub const fn from_fn<F>(f: F) -> FnOutput<F>
where
    F: Fn(&mut Message<'_, '_>) + Send + Sync,
{
    FnOutput(f)
}

/// Field selection plus the output that receives the lines.
#[derive(Clone)]
pub struct OutputSpec {
    pub mask: FieldMask,
    pub output: Arc<dyn Output>,
}

impl OutputSpec {
    #[must_use]
    pub fn new(mask: FieldMask, output: impl Output + 'static) -> Self {
        Self {
            mask,
            output: Arc::new(output),
        }
    }
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self::new(FieldMask::default(), StderrOutput)
    }
}

impl fmt::Debug for OutputSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSpec").field("mask", &self.mask).finish_non_exhaustive()
    }
}
