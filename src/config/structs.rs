//! Configuration struct definitions.

use crate::fmt::{DEFAULT_MEM_WIDTH, SourceStyle};
use serde::Deserialize;

/// `[general]`: process-wide gate and tag prefix.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Runtime output level (`verbose` .. `fatal`, or `off`).
    pub output_level: String,
    /// Joined to every tag with a dot. Empty disables it.
    pub tag_prefix: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output_level: "verbose".to_string(),
            tag_prefix: String::new(),
        }
    }
}

/// `[format]`: how lines are laid out.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Bytes per memory dump line.
    pub mem_width: usize,
    /// Field names to render. `None` keeps the build's default mask.
    pub fields: Option<Vec<String>>,
    pub source: SourceStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            mem_width: DEFAULT_MEM_WIDTH,
            fields: None,
            source: SourceStyle::default(),
        }
    }
}

/// Where lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Stderr,
    File,
    Syslog,
}

/// `[output]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub kind: OutputKind,
    /// Log file for `kind = "file"`. `~` is expanded.
    pub path: Option<String>,
    /// Syslog identity. Defaults to the executable name.
    pub ident: Option<String>,
}
