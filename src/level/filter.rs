//! Thresholds compared against a record's level.

use super::{Level, ParseLevelError};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// A minimum level, or `Off` to reject everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LevelFilter {
    #[default]
    Verbose = 1,
    Debug = 2,
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
    Off = u8::MAX,
}

impl LevelFilter {
    /// `true` when a record at `level` passes this threshold.
    #[inline(always)]
    #[must_use]
    pub const fn allows(self, level: Level) -> bool {
        level as u8 >= self as u8
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Off => "off",
        }
    }

    /// Inverse of `self as u8`. Any value above `Fatal` maps to `Off`, zero maps to `Verbose`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 | 1 => Self::Verbose,
            2 => Self::Debug,
            3 => Self::Info,
            4 => Self::Warn,
            5 => Self::Error,
            6 => Self::Fatal,
            _ => Self::Off,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        Self::from_u8(level as u8)
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            other => other
                .parse::<Level>()
                .map(Self::from)
                .map_err(|_| ParseLevelError(s.to_string())),
        }
    }
}

/// A `LevelFilter` that can be changed at run time. Loads and stores are
/// relaxed.
#[derive(Debug)]
pub struct AtomicLevelFilter(AtomicU8);

impl AtomicLevelFilter {
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    #[inline]
    #[must_use]
    pub fn get(&self) -> LevelFilter {
        LevelFilter::from_u8(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, level: LevelFilter) {
        self.0.store(level as u8, Ordering::Relaxed);
    }
}
