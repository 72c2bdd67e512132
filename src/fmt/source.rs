//! Source location field: `function@file:line `.

use crate::line::LineBuffer;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Call site captured by the logging macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub function: &'a str,
    pub file: &'a str,
    pub line: u32,
}

/// How much of the location to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStyle {
    /// `@file:line`
    Short,
    /// `function@file:line`
    #[default]
    Long,
}

impl fmt::Display for SourceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Short => "short",
            Self::Long => "long",
        })
    }
}

impl FromStr for SourceStyle {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            _ => Err(crate::Error::InvalidField(s.to_string())),
        }
    }
}

/// Strips everything up to the last `/` or `\`.
#[must_use]
pub fn short_file(path: &str) -> &str {
    path.rfind(['/', '\\']).map_or(path, |i| &path[i + 1..])
}

/// Reduces the `type_name` of a nested marker fn to the enclosing function's
/// own name: `app::net::connect::{{closure}}::__f` becomes `connect`.
#[doc(hidden)]
#[must_use]
pub fn function_name(marker: &'static str) -> &'static str {
    let mut path = marker.strip_suffix("::__f").unwrap_or(marker);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

pub fn put_source(line: &mut LineBuffer<'_>, location: &Location<'_>, style: SourceStyle) {
    if style == SourceStyle::Long {
        line.put(location.function.as_bytes());
    }
    line.put_byte(b'@');
    line.put(short_file(location.file).as_bytes());
    line.put_byte(b':');
    line.put_padded(location.line, 0, b' ');
    line.put_byte(b' ');
}
