//! Context field: `MM-DD HH:MM:SS.mmm PPPPP TTTTT L `.
//!
//! Time and process ids come from capabilities so tests can pin them.

use crate::level::Level;
use crate::line::LineBuffer;
use chrono::{Datelike, Local, Timelike};

/// Wall-clock fields the context needs, already in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millis: u32,
}

/// Source of [`Timestamp`]s.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Local time via `chrono`, read on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> Timestamp {
        let now = Local::now();
        Timestamp {
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            // leap seconds report 1000..=1999
            millis: now.timestamp_subsec_millis().min(999),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessIds {
    pub pid: u32,
    pub tid: u32,
}

/// Source of [`ProcessIds`].
pub trait ProcessInfo: Send + Sync {
    fn ids(&self) -> ProcessIds;
}

/// The calling process and OS thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentProcess;

impl ProcessInfo for CurrentProcess {
    fn ids(&self) -> ProcessIds {
        ProcessIds {
            pid: pid(),
            tid: tid(),
        }
    }
}

#[cfg(unix)]
fn pid() -> u32 {
    nix::unistd::getpid().as_raw().unsigned_abs()
}

#[cfg(not(unix))]
fn pid() -> u32 {
    std::process::id()
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn tid() -> u32 {
    nix::unistd::gettid().as_raw().unsigned_abs()
}

/// No portable OS thread id here: number threads in order of first use.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn tid() -> u32 {
    use std::sync::atomic::{AtomicU32, Ordering};

    static NEXT: AtomicU32 = AtomicU32::new(1);
    thread_local! {
        static TID: u32 = NEXT.fetch_add(1, Ordering::Relaxed);
    }
    TID.with(|tid| *tid)
}

/// Appends the context field. Output stops at capacity like every other writer.
pub fn put_context(
    line: &mut LineBuffer<'_>,
    level: Level,
    clock: &dyn Clock,
    process: &dyn ProcessInfo,
) {
    let t = clock.now();
    let ids = process.ids();

    line.put_padded(t.month, 2, b'0');
    line.put_byte(b'-');
    line.put_padded(t.day, 2, b'0');
    line.put_byte(b' ');
    line.put_padded(t.hour, 2, b'0');
    line.put_byte(b':');
    line.put_padded(t.minute, 2, b'0');
    line.put_byte(b':');
    line.put_padded(t.second, 2, b'0');
    line.put_byte(b'.');
    line.put_padded(t.millis, 3, b'0');
    line.put_byte(b' ');
    line.put_padded(ids.pid, 5, b' ');
    line.put_byte(b' ');
    line.put_padded(ids.tid, 5, b' ');
    line.put_byte(b' ');
    line.put_byte(level.as_char() as u8);
    line.put_byte(b' ');
}
