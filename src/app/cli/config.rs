//! TOML configuration file loading
//!
//! The config file supplies defaults for global options. It is read from
//! `--config-file` when given (and must then exist), otherwise from
//! `<config dir>/Pkgmeta/pkgmeta.toml` when that file is present.
//!
//! ```toml
//! log-level = "info"
//! log-format = "ext"
//! color = false
//! descriptor = "packaging/pkgmeta.toml"
//! ```

use std::path::{Path, PathBuf};

use crate::core::error_handling::ContextualError;
use crate::core::strings::title_case;

use super::args::{Args, LOG_FORMATS, LOG_LEVELS};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for '{key}' in configuration file: {message}")]
    InvalidValue { key: String, message: String },
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<String> {
        if self.is_user_actionable() {
            Some(self.to_string())
        } else {
            None
        }
    }
}

/// Keys accepted in the config file
const KNOWN_KEYS: [&str; 6] = [
    "log-level",
    "log-format",
    "log-file",
    "color",
    "descriptor",
    "base-dir",
];

impl Args {
    /// Default per-user config file location, if the platform has a config dir
    pub fn default_config_path(command_name: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|d| {
            d.join(title_case(command_name))
                .join(format!("{}.toml", command_name))
        })
    }

    /// Locate, read and apply the config file. Returns the path that was
    /// applied, or `None` when no config file was found.
    pub fn load_config(&mut self) -> Result<Option<PathBuf>, ConfigError> {
        let config_path = match &self.config_file {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.clone())),
            Some(path) => path.clone(),
            None => match Self::default_config_path("pkgmeta") {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        let config = Self::read_config_file(&config_path)?;
        Self::apply_toml_values(self, &config)?;
        Ok(Some(config_path))
    }

    /// Read and parse a config file into a raw TOML table
    pub fn read_config_file(path: &Path) -> Result<toml::Table, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<toml::Table>(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Apply TOML values for every option not already set on the command line
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> Result<(), ConfigError> {
        if let Some(key) = config.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(ConfigError::InvalidValue {
                key: key.clone(),
                message: format!("unknown key (expected one of: {})", KNOWN_KEYS.join(", ")),
            });
        }

        if args.log_level.is_none() {
            args.log_level = Self::choice_field(config, "log-level", &LOG_LEVELS)?;
        }
        if args.log_format.is_none() {
            args.log_format = Self::choice_field(config, "log-format", &LOG_FORMATS)?;
        }
        if args.log_file.is_none() {
            args.log_file = Self::string_field(config, "log-file")?.map(PathBuf::from);
        }
        if args.descriptor.is_none() {
            args.descriptor = Self::string_field(config, "descriptor")?.map(PathBuf::from);
        }
        if args.base_dir.is_none() {
            args.base_dir = Self::string_field(config, "base-dir")?.map(PathBuf::from);
        }

        // color = true/false only applies when neither --color nor --no-color was given
        if !args.color && !args.no_color {
            match config.get("color") {
                None => {}
                Some(toml::Value::Boolean(true)) => args.color = true,
                Some(toml::Value::Boolean(false)) => args.no_color = true,
                Some(other) => {
                    return Err(ConfigError::InvalidValue {
                        key: "color".to_string(),
                        message: format!("expected a boolean, found {}", other.type_str()),
                    })
                }
            }
        }

        Ok(())
    }

    fn string_field(config: &toml::Table, key: &str) -> Result<Option<String>, ConfigError> {
        match config.get(key) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("expected a string, found {}", other.type_str()),
            }),
        }
    }

    fn choice_field(
        config: &toml::Table,
        key: &str,
        choices: &[&str],
    ) -> Result<Option<String>, ConfigError> {
        match Self::string_field(config, key)? {
            Some(value) if !choices.contains(&value.as_str()) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("'{}' is not one of: {}", value, choices.join(", ")),
            }),
            value => Ok(value),
        }
    }
}
