//! Configuration management for Tribune.
//!
//! Configuration is read from `~/.config/tribune/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created. Missing fields fall back to their defaults.

pub mod colors;

pub use colors::ColorConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colors: ColorConfig,
    pub tui: TuiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: ColorConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event poll timeout in milliseconds. Bounds how quickly a finished
    /// background fetch reaches the screen.
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with
    /// comments and returns the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/tribune/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("tribune").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Tribune configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB"

[colors]
# Masthead above the item list
header_fg = "White"
header_bg = "Blue"

# Tab bar
tab_active = "White"
tab_inactive = "DarkGray"

# Selected list row
selection_fg = "Black"
selection_bg = "Cyan"

# Loading indicator and error message
spinner = "Gray"
error = "Red"

# Status bar
status_fg = "White"
status_bg = "DarkGray"

[tui]
# Event poll timeout in milliseconds.
tick_rate_ms = 100
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.colors.header_bg, ratatui::style::Color::Blue);
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[colors]
header_bg = "#1F4E9C"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom value
        assert_eq!(
            config.colors.header_bg,
            ratatui::style::Color::Rgb(0x1F, 0x4E, 0x9C)
        );
        // Default values
        assert_eq!(config.colors.status_bg, ratatui::style::Color::DarkGray);
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn test_empty_config() {
        let content = "";
        let config: Config = toml::from_str(content).expect("Empty config should work");

        assert_eq!(config.colors.selection_bg, ratatui::style::Color::Cyan);
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[tui]\ntick_rate_ms = 250").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Io { .. })
        ));
    }
}
