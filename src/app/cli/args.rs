//! Command line arguments
//!
//! Global options come first, followed by an optional command. Values that
//! are not given on the command line may be filled in from the config file
//! (see `config.rs`); command line values always win.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use strum_macros::Display;

use crate::core::version;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pkgmeta")]
#[command(about = "Resolve package versions and metadata from source files")]
#[command(version, long_version = version::long_version())]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Package descriptor file
    #[arg(short = 'd', long = "descriptor", value_name = "FILE", global = true)]
    pub descriptor: Option<PathBuf>,

    /// Base directory that version and readme paths are relative to
    #[arg(short = 'C', long = "base-dir", value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,

    /// Force colored output
    #[arg(long = "color", conflicts_with = "no_color", global = true)]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = LOG_LEVELS, global = true)]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = LOG_FORMATS, global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Accepted `--log-level` values
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accepted `--log-format` values
pub const LOG_FORMATS: [&str; 3] = ["text", "ext", "json"];

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the version declared in a source file
    Version {
        /// Path segments of the source file, relative to the base directory
        /// (defaults to the descriptor's version-file)
        #[arg(value_name = "PARTS")]
        parts: Vec<String>,

        /// Declaration identifier to search for
        #[arg(short = 'i', long = "identifier", value_name = "NAME")]
        identifier: Option<String>,
    },

    /// Show the resolved package metadata
    Show {
        /// Output format
        #[arg(short = 'F', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check the descriptor and report every problem found
    Check,
}

/// Output formats for `show`
#[derive(ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command to run; `show` as text when none was given
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show {
            format: OutputFormat::Text,
        })
    }

    /// Resolve color: explicit flags first, then `NO_COLOR`, then TTY detection
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            false
        } else {
            std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    }

    /// Descriptor path, falling back to the built-in default file name
    pub fn descriptor_path(&self) -> PathBuf {
        self.descriptor
            .clone()
            .unwrap_or_else(|| PathBuf::from(version::default_descriptor()))
    }

    /// Base directory for resolving paths declared in `descriptor`.
    ///
    /// `--base-dir` wins; otherwise the directory containing the descriptor,
    /// or the current directory for a bare file name.
    pub fn base_dir_for(&self, descriptor: &Path) -> PathBuf {
        if let Some(base) = &self.base_dir {
            return base.clone();
        }
        match descriptor.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Base directory when no descriptor is involved
    pub fn base_dir_or_current(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
