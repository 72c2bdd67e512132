//! Two-stage level gate.
//!
//! The static stage is a `const fn` over a cargo-feature constant, so a call
//! site below it folds to nothing. The macros put the whole call, arguments
//! included, behind the gate, which means disabled arguments are never
//! evaluated. The runtime stage is a relaxed atomic load.

use super::{Level, LevelFilter};
use crate::logger::global;

/// Compile-time minimum level.
///
/// Selected by the `min_level_*` features, most restrictive first. Without
/// any of them, debug builds keep `Debug` and release builds keep `Info`.
pub const STATIC_MIN_LEVEL: LevelFilter = if cfg!(feature = "min_level_off") {
    LevelFilter::Off
} else if cfg!(feature = "min_level_fatal") {
    LevelFilter::Fatal
} else if cfg!(feature = "min_level_error") {
    LevelFilter::Error
} else if cfg!(feature = "min_level_warn") {
    LevelFilter::Warn
} else if cfg!(feature = "min_level_info") {
    LevelFilter::Info
} else if cfg!(feature = "min_level_debug") {
    LevelFilter::Debug
} else if cfg!(feature = "min_level_verbose") {
    LevelFilter::Verbose
} else if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

/// When `true`, `secret!` bodies are compiled but never run.
pub const CENSORED: bool =
    cfg!(feature = "censored") || (!cfg!(debug_assertions) && !cfg!(feature = "uncensored"));

/// Static stage only.
#[inline(always)]
#[must_use]
pub const fn compiled_in(level: Level) -> bool {
    STATIC_MIN_LEVEL.allows(level)
}

/// Both stages. Use it to guard work that only feeds a log call.
#[inline]
#[must_use]
pub fn output_enabled(level: Level) -> bool {
    compiled_in(level) && global::output_level().allows(level)
}

/// The gate as a pure function of both thresholds.
#[must_use]
pub const fn allows(level: Level, static_min: LevelFilter, output: LevelFilter) -> bool {
    static_min.allows(level) && output.allows(level)
}
