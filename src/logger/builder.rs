//! Stepwise construction of a [`LogSpec`] for modules with their own output.

use super::{FormatSpec, LogSpec};
use crate::fmt::{Clock, FieldMask, ProcessInfo, SourceStyle};
use crate::output::{Output, OutputSpec};
use std::sync::Arc;

/// Starts from the defaults: stderr, default mask, local clock.
#[derive(Debug, Default)]
pub struct LogSpecBuilder {
    format: FormatSpec,
    output: OutputSpec,
}

impl LogSpecBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mask(mut self, mask: FieldMask) -> Self {
        self.output.mask = mask;
        self
    }

    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output.output = Arc::new(output);
        self
    }

    /// Shares an output already installed elsewhere.
    #[must_use]
    pub fn shared_output(mut self, output: Arc<dyn Output>) -> Self {
        self.output.output = output;
        self
    }

    #[must_use]
    pub const fn mem_width(mut self, width: usize) -> Self {
        self.format.mem_width = width;
        self
    }

    #[must_use]
    pub const fn source_style(mut self, style: SourceStyle) -> Self {
        self.format.source_style = style;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.format.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub fn process_info(mut self, process: impl ProcessInfo + 'static) -> Self {
        self.format.process = Arc::new(process);
        self
    }

    #[must_use]
    pub fn build(self) -> LogSpec {
        LogSpec {
            format: self.format,
            output: self.output,
        }
    }
}
