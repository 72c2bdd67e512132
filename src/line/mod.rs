//! Fixed-capacity line buffer with a clamped append cursor.
//!
//! Every writer moves `append` forward and stops at `end`. Nothing past
//! `append` is touched except by [`LineBuffer::terminate`], which writes an
//! end-of-line into the reserved tail without counting it as content.

use std::fmt;

/// Stack buffer size used by the logging macros.
pub const DEFAULT_CAPACITY: usize = 512;

/// Bytes held back at the end of the buffer for the end-of-line.
pub const RESERVED_TAIL: usize = 2;

/// End-of-line written by the line-oriented outputs.
pub const EOL: &[u8] = b"\n";

/// One in-progress log line over caller-supplied storage.
#[derive(Debug)]
pub struct LineBuffer<'a> {
    buf: &'a mut [u8],
    end: usize,
    append: usize,
    tag_b: usize,
    tag_e: usize,
    msg_b: usize,
}

impl<'a> LineBuffer<'a> {
    /// Carves a line out of `buf`, keeping `reserved_tail` bytes free for the EOL.
    /// A buffer smaller than the reserve has zero capacity.
    #[must_use]
    pub fn new(buf: &'a mut [u8], reserved_tail: usize) -> Self {
        let end = buf.len().saturating_sub(reserved_tail);
        Self {
            buf,
            end,
            append: 0,
            tag_b: 0,
            tag_e: 0,
            msg_b: 0,
        }
    }

    /// Maximum content length.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.end
    }

    /// Current content length.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.append
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.append == 0
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.end - self.append
    }

    /// Once full, every writer is a no-op.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.append == self.end
    }

    /// Appends as much of `bytes` as fits and returns how many were written.
    pub fn put(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.remaining());
        self.buf[self.append..self.append + n].copy_from_slice(&bytes[..n]);
        self.append += n;
        n
    }

    /// Returns `false` when the buffer is already full.
    pub fn put_byte(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.buf[self.append] = byte;
        self.append += 1;
        true
    }

    /// Appends `n` copies of `byte`, clipped.
    pub fn put_fill(&mut self, byte: u8, n: usize) -> usize {
        let n = n.min(self.remaining());
        self.buf[self.append..self.append + n].fill(byte);
        self.append += n;
        n
    }

    /// Appends `value` right-aligned in `width` columns using `pad`.
    /// Wider values are written in full, like `%5u`.
    pub fn put_padded(&mut self, value: u32, width: usize, pad: u8) -> usize {
        let mut digits = [0u8; 10];
        let mut i = digits.len();
        let mut v = value;
        loop {
            i -= 1;
            digits[i] = b'0' + (v % 10) as u8;
            v /= 10;
            if v == 0 {
                break;
            }
        }
        let number = &digits[i..];
        let padding = width.saturating_sub(number.len());
        self.put_fill(pad, padding) + self.put(number)
    }

    /// Content written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.append]
    }

    /// Content for outputs that post-process in place (case folding, masking).
    #[must_use]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.buf[..self.append]
    }

    /// Prefixed tag, without the separator that follows it.
    #[must_use]
    pub fn tag(&self) -> &[u8] {
        &self.buf[self.tag_b..self.tag_e]
    }

    /// Everything from the tag onwards. Sinks with their own timestamps use this.
    #[must_use]
    pub fn from_tag(&self) -> &[u8] {
        &self.buf[self.tag_b..self.append]
    }

    /// Context, tag and source fields.
    #[must_use]
    pub fn header(&self) -> &[u8] {
        &self.buf[..self.msg_b]
    }

    /// Formatted message text, or the current memory dump line.
    #[must_use]
    pub fn message(&self) -> &[u8] {
        &self.buf[self.msg_b..self.append]
    }

    /// Offset where the message starts.
    #[must_use]
    pub const fn message_start(&self) -> usize {
        self.msg_b
    }

    /// Writes `eol` right after the content, spilling into the reserved tail,
    /// and returns content plus terminator. `append` does not move, so a
    /// terminator never counts as content.
    pub fn terminate(&mut self, eol: &[u8]) -> &[u8] {
        let n = eol.len().min(self.buf.len() - self.append);
        self.buf[self.append..self.append + n].copy_from_slice(&eol[..n]);
        &self.buf[..self.append + n]
    }

    pub(crate) const fn set_tag_span(&mut self, begin: usize, end: usize) {
        self.tag_b = begin;
        self.tag_e = end;
    }

    pub(crate) const fn mark_message(&mut self) {
        self.msg_b = self.append;
    }

    /// Moves the cursor back to `pos` so a region can be rewritten.
    pub(crate) fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.append);
        self.append = pos.min(self.append);
    }
}

/// Clips on overflow and reports `fmt::Error` so formatting stops early.
impl fmt::Write for LineBuffer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.put(s.as_bytes()) == s.len() {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewind_keeps_header() {
        let mut storage = [0u8; 16];
        let mut line = LineBuffer::new(&mut storage, 0);
        line.put(b"head ");
        line.mark_message();
        line.put(b"first");
        line.rewind(line.message_start());
        line.put(b"2nd");
        assert_eq!(line.as_bytes(), b"head 2nd");
        assert_eq!(line.message(), b"2nd");
    }

    #[test]
    fn tag_span_excludes_separator() {
        let mut storage = [0u8; 16];
        let mut line = LineBuffer::new(&mut storage, 0);
        line.put(b"ctx ");
        line.set_tag_span(4, 7);
        line.put(b"TAG ");
        assert_eq!(line.tag(), b"TAG");
        assert_eq!(line.from_tag(), b"TAG ");
    }
}
