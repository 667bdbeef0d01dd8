//! TOML configuration loading.
//!
//! The only process-wide setting task logging depends on is the home directory;
//! it is read here once and handed to [`LogStore`](crate::LogStore) explicitly.

mod structs;

pub use structs::{DiagnosticsConfig, GeneralConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty or missing config file still yields a usable config — `#[serde(default)]`
/// on every section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Loads the config from the default location, falling back to defaults when
    /// the file doesn't exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses config from TOML text.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on invalid TOML or mistyped fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/tasklog/tasklog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tasklog").join("tasklog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// The configured home directory with `~` and `$VARS` expanded.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidPath`] when the path references an unset
    /// variable or is empty.
    pub fn home_dir(&self) -> Result<PathBuf, crate::Error> {
        let raw = self.general.home.trim();
        if raw.is_empty() {
            return Err(crate::Error::InvalidPath("home directory is empty".to_string()));
        }

        let expanded = shellexpand::full(raw)
            .map_err(|e| crate::Error::InvalidPath(format!("{raw}: {e}")))?;
        let home = PathBuf::from(expanded.as_ref());
        internal::trace("CONFIG", &format!("Resolved home: {}", home.display()));
        Ok(home)
    }

    /// Unknown level strings fall back to `warn` rather than failing the load.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.diagnostics.level.parse().unwrap_or(Level::Warn)
    }
}
