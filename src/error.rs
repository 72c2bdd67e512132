//! Unified error type for all stacklog operations.
//!
//! The formatting path itself never fails: truncation is silent and output
//! errors are dropped by dispatch. Errors surface only from setup calls.

use std::path::PathBuf;

/// Error type for stacklog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from an output.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// An output could not open its target (file, syslog socket).
    OutputOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Unknown level name.
    InvalidLevel(String),
    /// Unknown field name in a field list.
    InvalidField(String),
    /// `kind = "file"` without a `path`.
    MissingOutputPath,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::OutputOpen { path, source } => {
                write!(f, "failed to open output {}: {source}", path.display())
            }
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidField(field) => write!(f, "invalid field: {field}"),
            Self::MissingOutputPath => write!(f, "file output requires a path"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::OutputOpen { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
