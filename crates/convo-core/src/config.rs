//! Configuration management.
//!
//! Loads configuration from `${CONVO_HOME}/config.toml` with sensible
//! defaults. A missing file is not an error; a malformed one is.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::message::Role;

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Role the composer starts with.
    pub default_role: Role,

    /// Directory `conversation.json` is written into.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_role: Role::Human,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to the config path, creating
    /// parent directories. No-op if a config already exists.
    ///
    /// Returns whether a file was written.
    pub fn init() -> Result<bool> {
        Self::init_at(&paths::config_path())
    }

    /// Writes the default template to a specific path (no-op if present).
    pub fn init_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("write config to {}", path.display()))?;
        Ok(true)
    }
}

pub mod paths {
    //! Path resolution for convo configuration and data directories.
    //!
    //! CONVO_HOME resolution order:
    //! 1. CONVO_HOME environment variable (if set)
    //! 2. ~/.config/convo (default)

    use std::path::PathBuf;

    /// Returns the convo home directory.
    pub fn convo_home() -> PathBuf {
        if let Ok(home) = std::env::var("CONVO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("convo"))
            .unwrap_or_else(|| PathBuf::from(".convo"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        convo_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        convo_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.default_role, Role::Human);
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_role = \"gpt\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_role, Role::Gpt);
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_role = 42\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn init_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(Config::init_at(&path).unwrap());
        assert!(!Config::init_at(&path).unwrap());

        // The template must parse back into a valid config.
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_role, Role::Human);
    }
}
