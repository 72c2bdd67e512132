//! Tag field: `prefix.tag `.

use crate::line::LineBuffer;

/// Writes the prefixed tag and records its span.
///
/// The dot appears only when both parts are non-empty, and the trailing space
/// only when something was written.
pub fn put_tag(line: &mut LineBuffer<'_>, prefix: Option<&str>, tag: Option<&str>) {
    let begin = line.len();
    if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
        line.put(prefix.as_bytes());
    }
    if let Some(tag) = tag.filter(|t| !t.is_empty()) {
        if line.len() != begin {
            line.put_byte(b'.');
        }
        line.put(tag.as_bytes());
    }
    let end = line.len();
    line.set_tag_span(begin, end);
    if end != begin {
        line.put_byte(b' ');
    }
}
