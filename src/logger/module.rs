//! Per-module compile-time defaults.
//!
//! A module declares one `const` and passes it with `module:` to the logging
//! macros:
//!
//! ```
//! use stacklog::{LevelFilter, ModuleLog};
//!
//! const LOG: ModuleLog = ModuleLog::new().min_level(LevelFilter::Warn).tag("NET");
//!
//! stacklog::info!(module: LOG, "folded away");
//! stacklog::warn!(module: LOG, "logged as NET");
//! stacklog::warn!(module: LOG, tag: "DNS", "logged as DNS");
//! ```
//!
//! A module can also carry its own runtime threshold, which the global
//! [`set_output_level`](crate::set_output_level) then no longer affects. A
//! `const` can't point at the threshold, so this one is a `static`:
//!
//! ```
//! use stacklog::{AtomicLevelFilter, LevelFilter, ModuleLog};
//!
//! static NET_LEVEL: AtomicLevelFilter = AtomicLevelFilter::new(LevelFilter::Info);
//! static LOG: ModuleLog = ModuleLog::new().output_level(&NET_LEVEL);
//!
//! NET_LEVEL.set(LevelFilter::Error);
//! stacklog::warn!(module: LOG, "dropped");
//! ```

use super::global;
use crate::level::{AtomicLevelFilter, Level, LevelFilter, STATIC_MIN_LEVEL};

/// Module-wide minimum level, default tag and optional output threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleLog {
    /// Replaces [`STATIC_MIN_LEVEL`] for this module, in either direction.
    pub min_level: Option<LevelFilter>,
    /// Used when a call has no `tag:`.
    pub tag: Option<&'static str>,
    /// Replaces the global output level for this module.
    pub output_level: Option<&'static AtomicLevelFilter>,
}

impl ModuleLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_level: None,
            tag: None,
            output_level: None,
        }
    }

    #[must_use]
    pub const fn min_level(mut self, level: LevelFilter) -> Self {
        self.min_level = Some(level);
        self
    }

    #[must_use]
    pub const fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    #[must_use]
    pub const fn output_level(mut self, level: &'static AtomicLevelFilter) -> Self {
        self.output_level = Some(level);
        self
    }

    /// Static stage of the gate for call sites in this module.
    #[inline(always)]
    #[must_use]
    pub const fn compiled_in(&self, level: Level) -> bool {
        match self.min_level {
            Some(min) => min.allows(level),
            None => STATIC_MIN_LEVEL.allows(level),
        }
    }

    /// Runtime stage of the gate for call sites in this module.
    #[inline]
    #[must_use]
    pub fn output_allows(&self, level: Level) -> bool {
        match self.output_level {
            Some(threshold) => threshold.get().allows(level),
            None => global::output_level().allows(level),
        }
    }

    /// `tag`, or the module default when the call has none.
    #[inline]
    #[must_use]
    pub const fn tag_or_default<'a>(&self, tag: Option<&'a str>) -> Option<&'a str> {
        match tag {
            Some(tag) => Some(tag),
            None => self.tag,
        }
    }
}
