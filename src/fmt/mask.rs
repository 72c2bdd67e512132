//! Selects which structural fields are rendered.

use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Field selection. Order on the line is fixed regardless of which bits are set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldMask: u8 {
        /// Timestamp, pid, tid and level letter.
        const CONTEXT = 1 << 0;
        /// Tag prefix and tag.
        const TAG = 1 << 1;
        /// `function@file:line`.
        const SOURCE = 1 << 2;
        /// Formatted message.
        const MESSAGE = 1 << 3;
        const STD = Self::CONTEXT.bits() | Self::TAG.bits() | Self::SOURCE.bits() | Self::MESSAGE.bits();
    }
}

impl Default for FieldMask {
    /// Release builds drop the source location, debug builds keep everything.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::STD
        } else {
            Self::STD.difference(Self::SOURCE)
        }
    }
}

impl FieldMask {
    /// Builds a mask from field names as they appear in config files.
    ///
    /// # Errors
    /// Returns the first name that is not a known field.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ParseFieldError> {
        names
            .iter()
            .try_fold(Self::empty(), |mask, name| Ok(mask | name.as_ref().parse()?))
    }
}

/// Unknown field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError(pub(crate) String);

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field: '{}'", self.0)
    }
}

impl std::error::Error for ParseFieldError {}

impl From<ParseFieldError> for crate::Error {
    fn from(e: ParseFieldError) -> Self {
        Self::InvalidField(e.0)
    }
}

impl FromStr for FieldMask {
    type Err = ParseFieldError;

    /// Accepts a single field name, or `std`/`all` and `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "context" | "ctx" => Ok(Self::CONTEXT),
            "tag" => Ok(Self::TAG),
            "source" | "src" => Ok(Self::SOURCE),
            "message" | "msg" => Ok(Self::MESSAGE),
            "std" | "all" => Ok(Self::STD),
            "none" => Ok(Self::empty()),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}
