//! Memory dump lines: a hex column followed by an ASCII column.
//!
//! The hex column is always `2 * width + 2` wide, so the ASCII column starts at
//! the same offset on every line, including a short last one.

use crate::line::LineBuffer;

pub const DEFAULT_MEM_WIDTH: usize = 32;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Room one dump line needs after the message start, or `None` when it
/// overflows `usize`.
#[must_use]
pub const fn line_size(width: usize) -> Option<usize> {
    match width.checked_mul(3) {
        Some(n) => n.checked_add(2),
        None => None,
    }
}

/// Renders `data` as dump lines starting at the message offset of `line`,
/// calling `emit` once per line. The header before the message is kept on
/// every line.
///
/// Does nothing when `data` is empty, `width` is zero, or a full line would not
/// fit before the end of the buffer.
pub fn dump<F>(line: &mut LineBuffer<'_>, data: &[u8], width: usize, mut emit: F)
where
    F: FnMut(&mut LineBuffer<'_>),
{
    let hex_b = line.message_start();
    let fits = line_size(width)
        .and_then(|size| hex_b.checked_add(size))
        .is_some_and(|end| end <= line.capacity());
    if data.is_empty() || width == 0 || !fits {
        return;
    }

    for chunk in data.chunks(width) {
        line.rewind(hex_b);
        for &byte in chunk {
            line.put_byte(HEX[usize::from(byte >> 4)]);
            line.put_byte(HEX[usize::from(byte & 0x0f)]);
        }
        line.put_fill(b' ', 2 * (width - chunk.len()) + 2);
        for &byte in chunk {
            line.put_byte(if byte == b' ' || byte.is_ascii_graphic() {
                byte
            } else {
                b'?'
            });
        }
        emit(line);
    }
}
