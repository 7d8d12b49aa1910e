//! Output configuration.
//!
//! Loaded from `<config_dir>/stocktake/config.toml` when present. A
//! missing file is normal and yields defaults; an unreadable or invalid
//! file also yields defaults plus an error the caller can print as a
//! warning, so a broken config never blocks a session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color preference from config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow terminal capability detection
    #[default]
    Auto,
    Always,
    Never,
}

/// `[output]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// When to color output
    #[serde(default)]
    pub color: ColorMode,

    /// Use unicode glyphs (chevrons, bullets) in rendering
    #[serde(default = "default_unicode")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: default_unicode(),
        }
    }
}

fn default_unicode() -> bool {
    true
}

/// Top-level config file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Why a config file was ignored
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Parse one config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the user config, falling back to defaults.
    ///
    /// A file that exists but cannot be used returns the error alongside
    /// the defaults; a missing file is not an error.
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        let Some(path) = Self::default_path() else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load(&path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// `<config_dir>/stocktake/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stocktake").join("config.toml"))
    }
}
