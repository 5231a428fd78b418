//! The persisted preference model: YAML file I/O and path resolution.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)
//! - Defaults for every field, so a partial or missing file always yields
//!   a usable configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{BoolNullStyle, IndentMode, LogLevel, RoleColors};

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_indent() -> IndentMode {
    IndentMode::default()
}

fn default_thumbnail_line_budget() -> usize {
    38
}

fn default_spacer() -> char {
    ' '
}

fn default_dark_colors() -> RoleColors {
    RoleColors::dark_default()
}

fn default_light_colors() -> RoleColors {
    RoleColors::light_default()
}

// ---------------------------------------------------------------------------
// Config struct
// ---------------------------------------------------------------------------

/// User preferences for the preview renderer, persisted as `config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Indent width per nesting level, or `auto` for column-aligned scalars
    /// without furniture.
    #[serde(default = "default_indent")]
    pub indent: IndentMode,

    /// Sort object keys case-insensitively instead of document order.
    #[serde(default)]
    pub sort_keys: bool,

    /// How booleans and nulls are presented.
    #[serde(default)]
    pub bool_null_style: BoolNullStyle,

    /// Use the light-background palette.
    #[serde(default)]
    pub use_light_background: bool,

    /// Dump the raw text after the error banner when parsing fails.
    #[serde(default)]
    pub show_raw_on_error: bool,

    /// Maximum rendered lines in thumbnail mode.
    #[serde(default = "default_thumbnail_line_budget")]
    pub thumbnail_line_budget: usize,

    /// Character used to draw indentation (a visible character makes the
    /// indent structure inspectable).
    #[serde(default = "default_spacer")]
    pub spacer: char,

    /// Prefix every key and scalar with its nesting depth (`2-value`).
    #[serde(default)]
    pub debug_depth_tags: bool,

    /// Logging verbosity for the stderr log bridge.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Per-role colors for the dark presentation mode.
    #[serde(default = "default_dark_colors")]
    pub dark_colors: RoleColors,

    /// Per-role colors for the light presentation mode.
    #[serde(default = "default_light_colors")]
    pub light_colors: RoleColors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            sort_keys: false,
            bool_null_style: BoolNullStyle::default(),
            use_light_background: false,
            show_raw_on_error: false,
            thumbnail_line_budget: default_thumbnail_line_budget(),
            spacer: default_spacer(),
            debug_depth_tags: false,
            log_level: LogLevel::default(),
            dark_colors: default_dark_colors(),
            light_colors: default_light_colors(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, or return defaults when no
    /// file exists yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {config_path:?}");

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path:?}"))?;
        let config: Config = serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("failed to parse config file {path:?}"))?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        self.save_to(&config_path)
    }

    /// Save configuration to a specific file, atomically (temp file + rename
    /// so a crash mid-write never leaves a truncated config behind).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {parent:?}"))?;
        }

        let contents = serde_yaml_ng::to_string(self).context("failed to serialize config")?;

        let tmp_path = path.with_extension("yaml.tmp");
        fs::write(&tmp_path, &contents)
            .with_context(|| format!("failed to write config file {tmp_path:?}"))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to move config into place at {path:?}"))?;

        log::info!("Saved config to {path:?}");
        Ok(())
    }

    /// Directory holding the config file (`~/.config/par-jsonview` on Linux).
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("par-jsonview")
    }

    /// Full path of the config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.indent, IndentMode::Spaces(2));
        assert!(!config.sort_keys);
        assert_eq!(config.bool_null_style, BoolNullStyle::Glyph);
        assert!(!config.use_light_background);
        assert!(!config.show_raw_on_error);
        assert_eq!(config.thumbnail_line_budget, 38);
        assert_eq!(config.spacer, ' ');
        assert!(!config.debug_depth_tags);
        assert_eq!(config.log_level, LogLevel::Off);
        assert_eq!(config.dark_colors, RoleColors::dark_default());
        assert_eq!(config.light_colors, RoleColors::light_default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.indent = IndentMode::Auto;
        config.sort_keys = true;
        config.bool_null_style = BoolNullStyle::Outline;
        config.spacer = '·';

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_gets_defaults() {
        let yaml = "sort_keys: true\nindent: auto\n";
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(config.sort_keys);
        assert_eq!(config.indent, IndentMode::Auto);
        // Everything not in the file falls back to defaults.
        assert_eq!(config.thumbnail_line_budget, 38);
        assert_eq!(config.bool_null_style, BoolNullStyle::Glyph);
        assert_eq!(config.dark_colors, RoleColors::dark_default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.show_raw_on_error = true;
        config.thumbnail_line_budget = 12;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        // The temp file from the atomic write must not linger.
        assert!(!dir.path().join("config.yaml.tmp").exists());
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("nope.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_invalid_yaml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "indent: [this is not an indent]").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
