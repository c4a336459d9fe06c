//! Optional user configuration.
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/wcag-tally/` on Linux). Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings that shape where state lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Issue store location. Relative paths resolve against the working directory.
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(constants::DEFAULT_STORE_FILE_NAME),
        }
    }
}

/// Where the config was loaded from, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

/// Path of the config file, if a config directory can be determined.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(constants::APP_NAME).join(constants::CONFIG_FILE_NAME))
}

/// Loads the config from the platform location, falling back to defaults.
///
/// # Errors
///
/// Fails if the file exists but cannot be read or parsed.
pub fn load() -> Result<(Config, ConfigSource), ConfigError> {
    match default_config_path() {
        Some(path) => load_from(&path),
        None => Ok((Config::default(), ConfigSource::Defaults)),
    }
}

/// Loads the config at `path`. A missing file yields defaults.
///
/// # Errors
///
/// Fails if the file exists but cannot be read or parsed.
pub fn load_from(path: &Path) -> Result<(Config, ConfigSource), ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok((Config::default(), ConfigSource::Defaults));
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}
