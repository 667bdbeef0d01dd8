//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Base directory; task logs live in its `logs` subdirectory.
    /// `~` and environment variables are expanded.
    pub home: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        let home = directories::ProjectDirs::from("", "", "tasklog").map_or_else(
            || ".tasklog".to_string(),
            |dirs| dirs.data_dir().to_string_lossy().into_owned(),
        );

        Self { home }
    }
}

/// Settings for tasklog's own diagnostic output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Enable diagnostics on stderr.
    pub enabled: bool,
    /// Minimum diagnostic level.
    pub level: String,
    /// Color the level tag.
    pub colors: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "warn".to_string(),
            colors: true,
        }
    }
}
