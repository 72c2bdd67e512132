//! Tests for memory dump lines.

use parking_lot::Mutex;
use stacklog::fmt::mem;
use stacklog::{FieldMask, Level, LogSpec, Record, from_fn};
use std::sync::Arc;

const CRAZY: &[u8] = b"Here's to the crazy ones.\0";

fn spec(width: usize) -> (LogSpec, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);
    let spec = LogSpec::builder()
        .mask(FieldMask::TAG | FieldMask::MESSAGE)
        .mem_width(width)
        .output(from_fn(move |msg| sink.lock().push(msg.text().into_owned())))
        .build();
    (spec, lines)
}

fn dump(spec: &LogSpec, capacity: usize, data: &[u8]) {
    let mut storage = vec![0u8; capacity];
    spec.write_with(
        &mut storage,
        2,
        None,
        &Record {
            level: Level::Info,
            tag: Some("MEM"),
            location: None,
            args: format_args!("dump"),
            mem: Some(data),
        },
    );
}

#[test]
fn hex_and_ascii_columns() {
    let (spec, lines) = spec(16);
    dump(&spec, 128, CRAZY);
    let lines = lines.lock();
    assert_eq!(
        *lines,
        [
            "MEM dump",
            "MEM 48657265277320746f20746865206372  Here's to the cr",
            "MEM 617a79206f6e65732e00              azy ones.?",
        ]
    );
}

#[test]
fn ascii_column_is_aligned() {
    let width = 16;
    let ascii_at = "MEM ".len() + 2 * width + 2;
    for len in [16usize, 32, 40, 1, 15] {
        let data: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
        let (spec, lines) = spec(width);
        dump(&spec, 256, &data);
        let lines = lines.lock();
        assert_eq!(lines.len(), 1 + len.div_ceil(width), "len {len}");
        for (line, chunk) in lines[1..].iter().zip(data.chunks(width)) {
            assert_eq!(line.len(), ascii_at + chunk.len());
            assert_eq!(&line.as_bytes()[ascii_at..], chunk);
            assert_eq!(&line[ascii_at - 2..ascii_at], "  ");
        }
    }
}

#[test]
fn non_printables_become_question_marks() {
    let (spec, lines) = spec(4);
    dump(&spec, 64, &[0x00, b' ', 0x7f, 0xff]);
    assert_eq!(lines.lock()[1], "MEM 00207fff  ? ??");
}

#[test]
fn skipped_when_line_does_not_fit() {
    let (spec, lines) = spec(16);
    // 4 header bytes + 3 * 16 + 2 > 38
    dump(&spec, 40, CRAZY);
    assert_eq!(*lines.lock(), ["MEM dump"]);
}

#[test]
fn exact_fit_is_dumped() {
    let width = 4;
    let (spec, lines) = spec(width);
    dump(&spec, 4 + mem::line_size(width).unwrap() + 2, b"abcd");
    assert_eq!(lines.lock()[1], "MEM 61626364  abcd");
}

#[test]
fn empty_data_or_zero_width_skipped() {
    {
        let (spec, lines) = spec(16);
        dump(&spec, 128, &[]);
        assert_eq!(lines.lock().len(), 1);
    }

    let (spec, lines) = spec(0);
    dump(&spec, 128, CRAZY);
    assert_eq!(lines.lock().len(), 1);
}

#[test]
fn huge_width_is_skipped() {
    {
        let (spec, lines) = spec(usize::MAX / 2);
        dump(&spec, 128, b"abc");
        assert_eq!(*lines.lock(), ["MEM dump"]);
    }

    let (spec, lines) = spec(usize::MAX);
    dump(&spec, 128, b"abc");
    assert_eq!(*lines.lock(), ["MEM dump"]);
    assert_eq!(mem::line_size(usize::MAX / 3 + 1), None);
}

#[test]
fn default_width() {
    assert_eq!(mem::DEFAULT_MEM_WIDTH, 32);
    assert_eq!(mem::line_size(32), Some(98));
}
