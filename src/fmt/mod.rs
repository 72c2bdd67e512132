//! Field writers. Each one appends a single field to a [`LineBuffer`],
//! clipping at capacity, and never starts before the previous one ended.
//!
//! [`LineBuffer`]: crate::line::LineBuffer

mod context;
mod mask;
pub mod mem;
mod message;
pub mod source;
mod tag;

pub use context::{
    Clock, CurrentProcess, LocalClock, ProcessIds, ProcessInfo, Timestamp, put_context,
};
pub use mask::{FieldMask, ParseFieldError};
pub use mem::DEFAULT_MEM_WIDTH;
pub use message::put_message;
pub use source::{Location, SourceStyle, put_source, short_file};
pub use tag::put_tag;
