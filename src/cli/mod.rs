//! CLI module for stacklog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;

use crate::config::Config;
use crate::fmt::FieldMask;
use crate::level::{Level, LevelFilter};
use crate::logger::global;
use crate::output::OutputSpec;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Verbose => Self::Verbose,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
        }
    }
}

/// stacklog - Write bounded log lines from the command line.
#[derive(Parser)]
#[command(name = "stacklog", version, about = "Write bounded log lines from the command line")]
pub struct Cli {
    /// Config file (default: the platform config dir's stacklog.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Runtime output level (verbose..fatal, off)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub output_level: Option<LevelFilter>,
    /// Prefix joined to every tag
    #[arg(long, global = true, value_name = "PREFIX")]
    pub tag_prefix: Option<String>,
    /// Bytes per memory dump line
    #[arg(long, global = true, value_name = "N")]
    pub mem_width: Option<usize>,
    /// Fields to render, comma separated (context,tag,source,message)
    #[arg(long, global = true, value_delimiter = ',', value_name = "FIELDS")]
    pub fields: Option<Vec<String>>,
    /// Append to this file instead of the configured output
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a message.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Tag for the line
        #[arg(short, long)]
        tag: Option<String>,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Log a message followed by a hex dump of a file.
    Dump {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// File whose bytes are dumped
        path: PathBuf,
        /// Tag for the lines
        #[arg(short, long)]
        tag: Option<String>,
        /// Log message (defaults to the path)
        message: Vec<String>,
    },
}

impl Cli {
    /// Loads the config and layers the command-line overrides on top.
    ///
    /// # Errors
    /// Config load or apply failures, unknown field names, or a `--file`
    /// that can't be opened. A platform without a config directory is not an
    /// error.
    pub fn setup(&self) -> Result<(), crate::Error> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config.apply()?;

        if let Some(level) = self.output_level {
            global::set_output_level(level);
        }
        if let Some(prefix) = &self.tag_prefix {
            global::set_tag_prefix(prefix);
        }
        if let Some(width) = self.mem_width {
            global::set_mem_width(width);
        }
        if let Some(path) = &self.file {
            global::set_output_file(path)?;
        }
        if let Some(fields) = &self.fields {
            let mask = FieldMask::from_names(fields)?;
            let output = global::spec().output.output;
            global::set_output_spec(OutputSpec { mask, output });
        }
        Ok(())
    }
}

pub use commands::{cmd_dump, cmd_log};
