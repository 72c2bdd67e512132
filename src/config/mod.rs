//! TOML configuration: loading, and turning a parsed file into global state or
//! an aux [`LogSpec`].
//!
//! Every field has a default, so an empty or missing file yields a working
//! stderr logger.

mod structs;

pub use structs::{FormatConfig, GeneralConfig, OutputConfig, OutputKind};

use crate::fmt::FieldMask;
use crate::internal;
use crate::level::LevelFilter;
use crate::logger::{FormatSpec, LogSpec, global};
use crate::output::{FileOutput, OutputSpec, StderrOutput};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "stacklog.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub format: FormatConfig,
    pub output: OutputConfig,
    #[serde(skip)]
    origin: Origin,
}

/// Where a config came from, reported once it has been applied.
#[derive(Debug, Clone, Default)]
enum Origin {
    #[default]
    Inline,
    File(PathBuf),
    Missing(PathBuf),
    NoConfigDir,
}

impl Config {
    /// Reads `stacklog.toml` from the platform config directory. A platform
    /// without one gives the defaults.
    ///
    /// # Errors
    /// Fails if the file exists but can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path().ok();
        Self::load_in(path.as_deref().and_then(Path::parent))
    }

    /// Reads `stacklog.toml` from `config_dir`, or gives the defaults when
    /// there is no config directory.
    ///
    /// # Errors
    /// I/O or TOML syntax errors.
    pub fn load_in(config_dir: Option<&Path>) -> Result<Self, crate::Error> {
        match config_dir {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILE)),
            None => Ok(Self {
                origin: Origin::NoConfigDir,
                ..Self::default()
            }),
        }
    }

    /// Loads from an explicit path. A missing file gives the defaults.
    ///
    /// # Errors
    /// I/O or TOML syntax errors.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self {
                origin: Origin::Missing(path.to_path_buf()),
                ..Self::default()
            });
        }
        let mut config = Self::parse(&fs::read_to_string(path)?)?;
        config.origin = Origin::File(path.to_path_buf());
        Ok(config)
    }

    /// The file this config was read from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.origin {
            Origin::File(path) => Some(path),
            _ => None,
        }
    }

    /// # Errors
    /// TOML syntax or schema errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/stacklog/stacklog.toml`, e.g. `~/.config/stacklog/stacklog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "stacklog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// [`crate::Error::InvalidLevel`] for an unknown level name.
    pub fn output_level(&self) -> Result<LevelFilter, crate::Error> {
        Ok(self.general.output_level.parse()?)
    }

    /// Field mask from `[format] fields`, or the build default when unset.
    ///
    /// # Errors
    /// [`crate::Error::InvalidField`] for an unknown field name.
    pub fn mask(&self) -> Result<FieldMask, crate::Error> {
        match &self.format.fields {
            Some(names) => Ok(FieldMask::from_names(names)?),
            None => Ok(FieldMask::default()),
        }
    }

    /// Opens the configured output.
    ///
    /// # Errors
    /// Unknown field names, a file output without a path, or an output that
    /// can't be opened.
    pub fn output_spec(&self) -> Result<OutputSpec, crate::Error> {
        let mask = self.mask()?;
        match self.output.kind {
            OutputKind::Stderr => Ok(OutputSpec::new(mask, StderrOutput)),
            OutputKind::File => {
                let path = self
                    .output
                    .path
                    .as_deref()
                    .ok_or(crate::Error::MissingOutputPath)?;
                Ok(OutputSpec::new(mask, FileOutput::open(path)?))
            }
            OutputKind::Syslog => self.syslog_spec(mask),
        }
    }

    #[cfg(unix)]
    fn syslog_spec(&self, mask: FieldMask) -> Result<OutputSpec, crate::Error> {
        let ident = self.output.ident.clone().unwrap_or_else(default_ident);
        Ok(OutputSpec::new(
            mask,
            crate::output::SyslogOutput::open(ident)?,
        ))
    }

    #[cfg(not(unix))]
    fn syslog_spec(&self, mask: FieldMask) -> Result<OutputSpec, crate::Error> {
        internal::warn(format_args!("syslog is not available here, using stderr"));
        Ok(OutputSpec::new(mask, StderrOutput))
    }

    fn format_spec(&self) -> FormatSpec {
        FormatSpec {
            mem_width: self.format.mem_width,
            source_style: self.format.source,
            ..FormatSpec::default()
        }
    }

    /// Builds a standalone spec for `spec:` logging calls. The tag prefix and
    /// output level in `[general]` are ignored here since both are global.
    ///
    /// # Errors
    /// As [`output_spec`](Self::output_spec).
    pub fn log_spec(&self) -> Result<LogSpec, crate::Error> {
        Ok(LogSpec {
            format: self.format_spec(),
            output: self.output_spec()?,
        })
    }

    /// Installs this config as the global logging state.
    ///
    /// Everything is validated and the output opened before any global is
    /// touched, so on error the previous configuration stays in place.
    ///
    /// # Errors
    /// As [`output_level`](Self::output_level) and [`output_spec`](Self::output_spec).
    pub fn apply(&self) -> Result<(), crate::Error> {
        let level = self.output_level()?;
        let output = self.output_spec().inspect_err(|e| {
            internal::warn(format_args!("failed to open configured output: {e}"));
        })?;

        global::set_output_level(level);
        global::set_tag_prefix(&self.general.tag_prefix);
        global::set_mem_width(self.format.mem_width);
        global::set_source_style(self.format.source);
        global::set_output_spec(output);

        match &self.origin {
            Origin::Inline => {}
            Origin::File(path) => {
                internal::debug(format_args!("config loaded from {}", path.display()));
            }
            Origin::Missing(path) => internal::debug(format_args!(
                "config file {} not found, using defaults",
                path.display()
            )),
            Origin::NoConfigDir => {
                internal::debug(format_args!("no config directory, using defaults"));
            }
        }
        Ok(())
    }
}

#[cfg(unix)]
fn default_ident() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| internal::TAG.to_string())
}
