//! End-to-end truncation through the full pipeline.

use parking_lot::Mutex;
use stacklog::{FieldMask, Level, LogSpec, Record, from_fn};
use std::sync::Arc;

const SENTINEL: u8 = 0xee;
const LOREM: &str = "Lorem ipsum dolor sit amet.";

struct Seen {
    calls: usize,
    content: Vec<u8>,
    /// Longest line handed over, across memory dump lines too.
    max_len: usize,
}

fn spec(mask: FieldMask) -> (LogSpec, Arc<Mutex<Seen>>) {
    let seen = Arc::new(Mutex::new(Seen {
        calls: 0,
        content: Vec::new(),
        max_len: 0,
    }));
    let sink = Arc::clone(&seen);
    let spec = LogSpec::builder()
        .mask(mask)
        .output(from_fn(move |msg| {
            let mut seen = sink.lock();
            seen.calls += 1;
            seen.content = msg.bytes().to_vec();
            seen.max_len = seen.max_len.max(seen.content.len());
        }))
        .build();
    (spec, seen)
}

/// Runs one Info record over a sentinel-filled buffer of `size` bytes and
/// returns the buffer.
fn run(spec: &LogSpec, size: usize, mem: Option<&[u8]>) -> Vec<u8> {
    let mut storage = vec![SENTINEL; size];
    spec.write_with(
        &mut storage,
        2,
        Some("app"),
        &Record {
            level: Level::Info,
            tag: Some("TRUNC"),
            location: Some(stacklog::fmt::Location {
                function: "run",
                file: file!(),
                line: line!(),
            }),
            args: format_args!("{LOREM}"),
            mem,
        },
    );
    storage
}

#[test]
fn fits_in_128() {
    let (spec, seen) = spec(FieldMask::STD);
    run(&spec, 128, None);
    let seen = seen.lock();
    assert_eq!(seen.calls, 1);
    assert!(seen.content.ends_with(LOREM.as_bytes()));
    assert!(seen.content.len() <= 126);
}

#[test]
fn clipped_in_20() {
    let (spec, seen) = spec(FieldMask::STD);
    let storage = run(&spec, 20, None);
    let seen = seen.lock();
    assert_eq!(seen.calls, 1);
    assert_eq!(seen.content.len(), 18);
    assert!(!seen.content.ends_with(LOREM.as_bytes()));
    assert!(storage[18..].iter().all(|&b| b == SENTINEL));
}

#[test]
fn clipped_message_keeps_its_prefix() {
    let (spec, seen) = spec(FieldMask::MESSAGE);
    run(&spec, 13, None);
    assert_eq!(seen.lock().content, b"Lorem ipsum");
}

#[test]
fn sentinel_survives_every_size() {
    for mask in [FieldMask::STD, FieldMask::MESSAGE, FieldMask::TAG | FieldMask::SOURCE] {
        let (spec, seen) = spec(mask);
        for size in 0..=160 {
            let storage = run(&spec, size, Some(&b"0123456789abcdef0123456789abcdef!"[..]));
            let mut seen = seen.lock();
            let len = std::mem::take(&mut seen.max_len);
            assert!(len <= size.saturating_sub(2), "mask {mask:?} size {size}");
            assert!(
                storage[len..].iter().all(|&b| b == SENTINEL),
                "mask {mask:?} size {size}"
            );
        }
    }
}
