//! Tests for the logging macros against the global configuration.
//!
//! Global state is shared by every test in this binary, so each test holds
//! `LOCK` and installs its own capturing output.

use parking_lot::{Mutex, MutexGuard};
use stacklog::level::compiled_in;
use stacklog::{FieldMask, Level, LevelFilter, LogSpec, from_fn};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

static LOCK: Mutex<()> = parking_lot::const_mutex(());

type Lines = Arc<Mutex<Vec<String>>>;

fn capture(mask: FieldMask) -> (MutexGuard<'static, ()>, Lines) {
    let guard = LOCK.lock();
    let lines: Lines = Arc::default();
    let sink = Arc::clone(&lines);
    stacklog::set_output(
        mask,
        from_fn(move |msg| sink.lock().push(msg.text().into_owned())),
    );
    stacklog::set_output_level(LevelFilter::Verbose);
    stacklog::set_tag_prefix("");
    (guard, lines)
}

fn bump(counter: &AtomicUsize) -> usize {
    counter.fetch_add(1, Ordering::Relaxed) + 1
}

#[test]
fn writes_tag_and_message() {
    let (_guard, lines) = capture(FieldMask::TAG | FieldMask::MESSAGE);
    stacklog::info!(tag: "MAIN", "started {} workers", 4);
    stacklog::error!("no tag");
    assert_eq!(*lines.lock(), ["MAIN started 4 workers", "no tag"]);
}

#[test]
fn tag_prefix_is_global() {
    let (_guard, lines) = capture(FieldMask::TAG | FieldMask::MESSAGE);
    stacklog::set_tag_prefix("app");
    stacklog::warn!(tag: "NET", "a");
    stacklog::warn!("b");
    stacklog::set_tag_prefix("");
    stacklog::warn!(tag: "NET", "c");
    assert_eq!(*lines.lock(), ["app.NET a", "app b", "NET c"]);
}

#[test]
fn disabled_arguments_are_not_evaluated() {
    let (_guard, lines) = capture(FieldMask::MESSAGE);
    let counter = AtomicUsize::new(0);

    stacklog::set_output_level(LevelFilter::Warn);
    stacklog::info!("{}", bump(&counter));
    stacklog::debug!(tag: "T", mem: [1u8, 2], "{}", bump(&counter));
    assert_eq!(counter.load(Ordering::Relaxed), 0);
    assert!(lines.lock().is_empty());

    stacklog::warn!("{}", bump(&counter));
    assert_eq!(counter.load(Ordering::Relaxed), 1);
    assert_eq!(*lines.lock(), ["1"]);
}

#[test]
fn runtime_gate_grid() {
    let (_guard, lines) = capture(FieldMask::MESSAGE);
    let filters = [
        LevelFilter::Verbose,
        LevelFilter::Debug,
        LevelFilter::Info,
        LevelFilter::Warn,
        LevelFilter::Error,
        LevelFilter::Fatal,
        LevelFilter::Off,
    ];
    // Fatal aborts, see tests/cli.rs.
    let levels = [Level::Verbose, Level::Debug, Level::Info, Level::Warn, Level::Error];

    for output in filters {
        stacklog::set_output_level(output);
        for level in levels {
            let counter = AtomicUsize::new(0);
            lines.lock().clear();
            stacklog::log!(level, "{}", bump(&counter));

            let expected = usize::from(compiled_in(level) && output.allows(level));
            assert_eq!(counter.load(Ordering::Relaxed), expected, "{level} at {output}");
            assert_eq!(lines.lock().len(), expected, "{level} at {output}");
            assert_eq!(stacklog::output_enabled(level), expected == 1);
        }
    }
}

#[test]
fn verbose_follows_static_minimum() {
    let (_guard, lines) = capture(FieldMask::MESSAGE);
    let counter = AtomicUsize::new(0);
    stacklog::verbose!("{}", bump(&counter));
    let expected = usize::from(compiled_in(Level::Verbose));
    assert_eq!(counter.load(Ordering::Relaxed), expected);
    assert_eq!(lines.lock().len(), expected);
}

#[test]
fn mem_adds_dump_lines() {
    let (_guard, lines) = capture(FieldMask::TAG | FieldMask::MESSAGE);
    stacklog::set_mem_width(4);
    let frame = vec![b'a', b'b', b'c', b'd', b'e'];
    stacklog::info!(tag: "IO", mem: frame, "frame");
    stacklog::info!(mem: &frame[..2], "head");
    stacklog::set_mem_width(stacklog::fmt::DEFAULT_MEM_WIDTH);
    assert_eq!(
        *lines.lock(),
        [
            "IO frame",
            "IO 61626364  abcd",
            "IO 65        e",
            "head",
            "6162      ab",
        ]
    );
}

#[test]
fn source_names_enclosing_function() {
    let (_guard, lines) = capture(FieldMask::SOURCE | FieldMask::MESSAGE);
    stacklog::set_source_style(stacklog::SourceStyle::Long);
    stacklog::info!("direct");
    let from_closure = || stacklog::info!("closure");
    from_closure();

    let lines = lines.lock();
    for (line, message) in lines.iter().zip(["direct", "closure"]) {
        assert!(
            line.starts_with("source_names_enclosing_function@macros.rs:"),
            "{line}"
        );
        assert!(line.ends_with(message));
    }
}

#[test]
fn aux_spec_bypasses_global_output() {
    let (_guard, global_lines) = capture(FieldMask::TAG | FieldMask::MESSAGE);
    let aux_lines: Lines = Arc::default();
    let sink = Arc::clone(&aux_lines);
    let aux = LogSpec::builder()
        .mask(FieldMask::TAG | FieldMask::MESSAGE)
        .output(from_fn(move |msg| sink.lock().push(msg.text().into_owned())))
        .build();

    stacklog::set_tag_prefix("app");
    stacklog::info!(spec: &aux, tag: "AUX", "to aux");
    stacklog::info!(spec: &aux, "untagged");
    stacklog::info!("to global");
    stacklog::set_tag_prefix("");

    assert_eq!(*aux_lines.lock(), ["app.AUX to aux", "app untagged"]);
    assert_eq!(*global_lines.lock(), ["app to global"]);
}

#[test]
fn aux_spec_respects_output_level() {
    let (_guard, _) = capture(FieldMask::MESSAGE);
    let aux_lines: Lines = Arc::default();
    let sink = Arc::clone(&aux_lines);
    let aux = LogSpec::builder()
        .output(from_fn(move |msg| sink.lock().push(msg.text().into_owned())))
        .build();

    stacklog::set_output_level(LevelFilter::Off);
    stacklog::error!(spec: &aux, "dropped");
    assert!(aux_lines.lock().is_empty());
}

#[test]
fn secret_runs_only_uncensored() {
    let counter = AtomicUsize::new(0);
    stacklog::secret! {
        bump(&counter);
    }
    assert_eq!(
        counter.load(Ordering::Relaxed),
        usize::from(!stacklog::CENSORED)
    );
}

#[test]
fn output_messages_can_be_rewritten_in_place() {
    let (_guard, lines) = capture(FieldMask::MESSAGE);
    let upper: Lines = Arc::default();
    let sink = Arc::clone(&upper);
    stacklog::set_output(
        FieldMask::MESSAGE,
        from_fn(move |msg| {
            msg.bytes_mut().make_ascii_uppercase();
            sink.lock().push(msg.text().into_owned());
        }),
    );
    stacklog::info!("quiet please");
    assert_eq!(*upper.lock(), ["QUIET PLEASE"]);
    assert!(lines.lock().is_empty());
}
