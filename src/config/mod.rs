//! Configuration system for kindleloc.
//!
//! This module provides the configuration structure for kindleloc with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use kindleloc::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.position_name, "kloc");
//! assert_eq!(config.theme, "default-dark");
//!
//! // Create custom configuration
//! let custom = Config {
//!     position_name: "loc".to_string(),
//!     ..Config::default()
//! };
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the kindleloc application.
///
/// All fields have defaults, so a config file only needs the settings it
/// changes.
///
/// # Fields
///
/// * `position_name` - Label shown before the location in the status line (default: "kloc")
/// * `theme` - Color scheme name (default: "default-dark")
/// * `show_line_numbers` - Display line numbers next to the text (default: true)
/// * `log_file` - Write diagnostics to this file (default: none)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Label shown before the location in the status line
    #[serde(default = "default_position_name")]
    pub position_name: String,

    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Display line numbers next to the text
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Write diagnostics to this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Returns the default status label.
fn default_position_name() -> String {
    "kloc".to_string()
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

/// Returns the default for showing line numbers.
fn default_show_line_numbers() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position_name: default_position_name(),
            theme: default_theme(),
            show_line_numbers: default_show_line_numbers(),
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/kindleloc/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("kindleloc");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file is missing, unreadable or not valid TOML.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "ignoring invalid config file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
