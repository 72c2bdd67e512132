//! Tests for the file output and switching the global output to a file.

use parking_lot::Mutex;
use stacklog::{Error, FieldMask, FileOutput, LevelFilter, LogSpec, from_fn};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

static LOCK: Mutex<()> = parking_lot::const_mutex(());

fn file_spec(output: FileOutput) -> LogSpec {
    LogSpec::builder()
        .mask(FieldMask::TAG | FieldMask::MESSAGE)
        .output(output)
        .build()
}

#[test]
fn file_output_appends_terminated_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let spec = file_spec(FileOutput::open(&path).unwrap());

    stacklog::info!(spec: &spec, tag: "A", "first");
    stacklog::error!(spec: &spec, "second {}", 2);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "A first\nsecond 2\n");
}

#[test]
fn file_output_creates_parent_directories() {
    // reports the new directory through the global output
    let _guard = LOCK.lock();
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nested").join("deeper").join("out.log");
    let output = FileOutput::open(&path).unwrap();
    assert_eq!(output.path(), path);
    assert!(path.exists());
}

#[test]
fn file_output_keeps_existing_content() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("keep.log");
    fs::write(&path, "old\n").unwrap();

    let spec = file_spec(FileOutput::open(&path).unwrap());
    stacklog::warn!(spec: &spec, "new");

    assert_eq!(fs::read_to_string(&path).unwrap(), "old\nnew\n");
}

#[test]
fn file_output_writes_memory_dump_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("dump.log");
    let spec = LogSpec::builder()
        .mask(FieldMask::MESSAGE)
        .mem_width(2)
        .output(FileOutput::open(&path).unwrap())
        .build();

    stacklog::info!(spec: &spec, mem: b"hi!", "bytes");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "bytes\n6869  hi\n21    !\n"
    );
}

#[test]
fn open_failure_reports_path() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("not_a_dir");
    fs::write(&blocker, "").unwrap();

    let err = FileOutput::open(blocker.join("x.log")).unwrap_err();
    assert!(matches!(err, Error::OutputOpen { ref path, .. } if path.starts_with(&blocker)));
}

#[test]
fn set_output_file_failure_keeps_current_output() {
    let _guard = LOCK.lock();
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("not_a_dir");
    fs::write(&blocker, "").unwrap();

    let lines = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&lines);
    stacklog::set_output(
        FieldMask::TAG | FieldMask::MESSAGE,
        from_fn(move |msg| sink.lock().push(msg.text().into_owned())),
    );
    stacklog::set_output_level(LevelFilter::Verbose);

    let result = stacklog::set_output_file(blocker.join("x.log"));
    assert!(matches!(result, Err(Error::OutputOpen { .. })));

    stacklog::info!("still captured");
    let lines = lines.lock();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("stacklog failed to open log file"));
    assert_eq!(lines[1], "still captured");
}

#[test]
fn set_output_file_keeps_mask() {
    let _guard = LOCK.lock();
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("global.log");

    stacklog::set_output(FieldMask::MESSAGE, from_fn(|_| {}));
    stacklog::set_output_level(LevelFilter::Verbose);
    stacklog::set_output_file(&path).unwrap();
    stacklog::info!(tag: "IGNORED", "to file");
    stacklog::flush().unwrap();
    stacklog::set_output_spec(stacklog::OutputSpec::default());

    assert_eq!(fs::read_to_string(&path).unwrap(), "to file\n");
}
