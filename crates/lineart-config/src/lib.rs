//! Configuration file handling for lineart.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/lineart/config.toml` on Linux). A missing file
//! means defaults; `LINEART_CONFIG` points at an alternative file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use lineart_core::SimulationSettings;
use lineart_render::Marker;
use log::debug;
use serde::Deserialize;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "LINEART_CONFIG";

const CONFIG_FILE: &str = "config.toml";

/// Errors while loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Io(PathBuf, io::Error),
    /// The file is not valid TOML for [`Config`].
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => write!(f, "failed to parse {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
        }
    }
}

/// Terminal presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Milliseconds between frames.
    pub tick_ms: u64,
    pub marker: Marker,
    pub show_help: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            marker: Marker::default(),
            show_help: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed random seed for reproducible runs.
    pub seed: Option<u64>,
    pub simulation: SimulationSettings,
    pub display: DisplaySection,
}

impl Config {
    /// Load from `LINEART_CONFIG` or the default location.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(path.to_path_buf(), e)),
        };
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolved config file location.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "lineart").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn settings(&self) -> SimulationSettings {
        self.simulation
    }
}
