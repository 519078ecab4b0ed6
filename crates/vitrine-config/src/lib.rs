//! Configuration loading for the vitrine showcase.
//!
//! Settings live in `config.toml` under the platform config directory.
//! A missing file means defaults; a malformed file is an error the
//! binary surfaces at startup.

use std::path::{Path, PathBuf};
use std::{fs, io};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_core::EnvironmentPreset;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The config file is not valid TOML for the expected schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: String,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}

/// User-tunable settings for the showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Environment preset selecting the palette.
    pub preset: EnvironmentPreset,
    /// Frame cadence; the event poll timeout in milliseconds.
    pub tick_rate_ms: u64,
    /// Whether the camera auto-rotates at startup.
    pub auto_rotate: bool,
    /// Whether mouse capture is requested for camera input.
    pub mouse: bool,
    /// Optional external wordmark glyph file for the hero title.
    pub font_path: Option<PathBuf>,
    /// Seed for the particle field.
    pub particle_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: EnvironmentPreset::Night,
            tick_rate_ms: 33,
            auto_rotate: true,
            mouse: true,
            font_path: None,
            particle_seed: 0,
        }
    }
}

impl Config {
    /// Load configuration from the platform config directory.
    ///
    /// Returns defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// Returns defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: err,
                });
            }
        };
        toml::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            source: err,
        })
    }

    /// The per-platform path of the config file, when one is defined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "vitrine").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "auto_rotate = false\ntick_rate_ms = 16").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.auto_rotate);
        assert_eq!(config.tick_rate_ms, 16);
        assert_eq!(config.preset, EnvironmentPreset::Night);
    }

    #[test]
    fn preset_parses_by_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "preset = \"dusk\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.preset, EnvironmentPreset::Dusk);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate_ms = \"soon\"").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate = 5").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
