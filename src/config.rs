//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_MACRO_A, DEFAULT_MACRO_B};
use crate::parser::MacroNames;
use crate::render::PreviewStyle;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "GPLAYOUT_CONFIG_DIR";

/// Largest accepted canvas dimension.
const MAX_CANVAS_SIZE: u32 = 1024;

/// Macro names used when reading and writing board headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Macro holding side A
    #[serde(default = "default_macro_a")]
    pub macro_a: String,
    /// Macro holding side B
    #[serde(default = "default_macro_b")]
    pub macro_b: String,
}

fn default_macro_a() -> String {
    DEFAULT_MACRO_A.to_string()
}

fn default_macro_b() -> String {
    DEFAULT_MACRO_B.to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            macro_a: default_macro_a(),
            macro_b: default_macro_b(),
        }
    }
}

impl LayoutConfig {
    /// Macro names in the form the parser expects.
    pub fn macro_names(&self) -> MacroNames {
        MacroNames::new(&self.macro_a, &self.macro_b)
    }
}

/// Preview rendering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Text style used by `preview`
    #[serde(default)]
    pub style: PreviewStyle,
    /// Display width in pixels
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    /// Display height in pixels
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
}

fn default_canvas_width() -> u32 {
    CANVAS_WIDTH
}

fn default_canvas_height() -> u32 {
    CANVAS_HEIGHT
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            style: PreviewStyle::default(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/gplayout/config.toml`
/// - macOS: `~/Library/Application Support/gplayout/config.toml`
/// - Windows: `%APPDATA%\gplayout\config.toml`
///
/// The directory can be overridden with `GPLAYOUT_CONFIG_DIR`.
///
/// # Validation
///
/// - macro names must be C identifiers and differ from each other
/// - canvas dimensions must be between 1 and 1024
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Header macro names
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Preview settings
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("gplayout");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid configuration TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!("Saved configuration to {}", config_path.display());
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let identifier =
            Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").context("Invalid identifier pattern")?;

        for (key, name) in [
            ("layout.macro_a", &self.layout.macro_a),
            ("layout.macro_b", &self.layout.macro_b),
        ] {
            if !identifier.is_match(name) {
                anyhow::bail!("Invalid {key} '{name}'. Macro names must be C identifiers");
            }
        }

        if self.layout.macro_a == self.layout.macro_b {
            anyhow::bail!(
                "layout.macro_a and layout.macro_b must differ (both are '{}')",
                self.layout.macro_a
            );
        }

        for (key, size) in [
            ("preview.canvas_width", self.preview.canvas_width),
            ("preview.canvas_height", self.preview.canvas_height),
        ] {
            if size == 0 || size > MAX_CANVAS_SIZE {
                anyhow::bail!("Invalid {key} {size}. Must be between 1 and {MAX_CANVAS_SIZE}");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.layout.macro_a, "DEFAULT_BOARD_LAYOUT_A");
        assert_eq!(config.layout.macro_b, "DEFAULT_BOARD_LAYOUT_B");
        assert_eq!(config.preview.style, PreviewStyle::Blocks);
        assert_eq!(config.preview.canvas_width, 128);
        assert_eq!(config.preview.canvas_height, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("[preview]\nstyle = \"ascii\"\n").unwrap();
        assert_eq!(config.preview.style, PreviewStyle::Ascii);
        assert_eq!(config.preview.canvas_width, 128);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_empty_toml() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::new();
        config.layout.macro_a = "MY_LEFT".to_string();
        config.preview.canvas_height = 32;

        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_macro_name() {
        let mut config = Config::new();
        config.layout.macro_b = "NOT VALID".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("layout.macro_b"));
    }

    #[test]
    fn test_duplicate_macro_names() {
        let mut config = Config::new();
        config.layout.macro_b = config.layout.macro_a.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_canvas_bounds() {
        let mut config = Config::new();
        config.preview.canvas_width = 0;
        assert!(config.validate().is_err());
        config.preview.canvas_width = 2048;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(Config::from_toml("[preview]\nstyle = \"color\"\n").is_err());
    }

    #[test]
    fn test_macro_names() {
        let names = Config::new().layout.macro_names();
        assert_eq!(names, MacroNames::default());
    }
}
