use crate::line::LineBuffer;
use std::fmt::{self, Write};

/// Formats `args` into whatever space is left.
pub fn put_message(line: &mut LineBuffer<'_>, args: fmt::Arguments<'_>) {
    match args.as_str() {
        Some(literal) => {
            line.put(literal.as_bytes());
        }
        // fmt::Error here only means the line filled up
        None => {
            let _ = line.write_fmt(args);
        }
    }
}
