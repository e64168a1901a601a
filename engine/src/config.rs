//! Configuration loading for Cubik.
//!
//! Configuration lives at `~/.cubik/config.toml`. A missing file is not an
//! error; every field has a default.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;
use thiserror::Error;

/// Top-level configuration file contents.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// scramble_moves = 100
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CubikConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII color initials instead of colored blank cells.
    #[serde(default)]
    pub ascii_only: bool,
    /// Restrict the palette to the 16 ANSI colors.
    #[serde(default)]
    pub high_contrast: bool,
    /// Twists applied per scramble.
    pub scramble_moves: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl CubikConfig {
    /// Location of the config file, `None` when no home directory exists.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".cubik").join("config.toml"))
    }

    /// Loads the config file if present. `Ok(None)` when there is none.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Loads a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        let config = toml::from_str(&raw).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;
        Ok(Some(config))
    }
}
