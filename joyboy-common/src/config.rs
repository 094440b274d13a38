use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::animation::Easing;
use crate::color::{Palette, ThemeMode};

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Longest accepted pause between position recomputations
pub const MAX_FRAME_INTERVAL_MS: u64 = 1000;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Layout and animation policy for the anchored menu.
///
/// Every field has a default, so a YAML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Upper bound on panel width
    pub max_width: f64,
    /// Panel width is at most `viewport_width / width_divisor`
    pub width_divisor: f64,
    /// Space required below the handle before the panel flips above it
    pub flip_threshold: f64,
    /// Gap between handle and panel
    pub anchor_gap: f64,
    /// Distance kept from the right viewport edge when the panel overflows
    pub edge_margin: f64,
    /// Open/close fade duration
    pub duration_ms: f64,
    pub easing: Easing,
    /// Interval between position recomputations while the overlay is mounted
    pub frame_interval_ms: u64,
    /// Keep the overlay mounted until the closing fade finishes.
    /// Off by default: the panel unmounts as soon as the menu closes.
    pub keep_mounted_while_closing: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_width: 320.0,
            width_divisor: 1.5,
            flip_threshold: 40.0,
            anchor_gap: 8.0,
            edge_margin: 8.0,
            duration_ms: 150.0,
            easing: Easing::default(),
            frame_interval_ms: 16,
            keep_mounted_while_closing: false,
        }
    }
}

impl MenuConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        }

        fn non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Config(format!(
                    "{name} must not be negative, got {value}"
                )))
            }
        }

        positive("max_width", self.max_width)?;
        positive("width_divisor", self.width_divisor)?;
        non_negative("flip_threshold", self.flip_threshold)?;
        non_negative("anchor_gap", self.anchor_gap)?;
        non_negative("edge_margin", self.edge_margin)?;
        non_negative("duration_ms", self.duration_ms)?;

        if !(1..=MAX_FRAME_INTERVAL_MS).contains(&self.frame_interval_ms) {
            return Err(ConfigError::Config(format!(
                "frame_interval_ms must be between 1 and {MAX_FRAME_INTERVAL_MS}, got {}",
                self.frame_interval_ms
            )));
        }

        Ok(())
    }
}

/// YAML config file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeMode,
    /// Replaces the theme's built-in palette when set
    pub palette: Option<Palette>,
    pub menu: MenuConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `config.yaml` in the working
    /// directory is used when present, and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                info!("Loading config from {}", path.display());
                Self::from_file(path)
            }
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    info!("Loading config from {}", fallback.display());
                    Self::from_file(&fallback)
                } else {
                    info!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            warn!("Config file is empty, using defaults");
            return Ok(Self::default());
        }
        let config: Config =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        config.menu.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Palette in effect: the explicit override, or the theme's built-in one
    pub fn palette(&self) -> Palette {
        self.palette
            .clone()
            .unwrap_or_else(|| Palette::for_theme(self.theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout_policy() {
        let menu = MenuConfig::default();
        assert_eq!(menu.max_width, 320.0);
        assert_eq!(menu.width_divisor, 1.5);
        assert_eq!(menu.flip_threshold, 40.0);
        assert_eq!(menu.anchor_gap, 8.0);
        assert_eq!(menu.edge_margin, 8.0);
        assert_eq!(menu.duration_ms, 150.0);
        assert!(!menu.keep_mounted_while_closing);
        assert!(menu.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("menu:\n  duration_ms: 300\n").unwrap();
        assert_eq!(config.menu.duration_ms, 300.0);
        assert_eq!(config.menu.max_width, 320.0);
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_easing_and_theme_from_yaml() {
        let yaml = "theme: dark\nmenu:\n  easing: ease-out-cubic\n  keep_mounted_while_closing: true\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.menu.easing, Easing::EaseOutCubic);
        assert!(config.menu.keep_mounted_while_closing);
        assert_eq!(config.palette(), Palette::dark());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_bad_divisor() {
        let err = Config::from_yaml("menu:\n  width_divisor: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)), "{err}");
    }

    #[test]
    fn test_rejects_zero_frame_interval() {
        let err = Config::from_yaml("menu:\n  frame_interval_ms: 0\n").unwrap_err();
        assert!(err.to_string().contains("frame_interval_ms"));
    }

    #[test]
    fn test_rejects_oversized_frame_interval() {
        let menu = MenuConfig {
            frame_interval_ms: u64::from(u32::MAX) + 1,
            ..MenuConfig::default()
        };
        assert!(menu.validate().is_err());

        let menu = MenuConfig {
            frame_interval_ms: MAX_FRAME_INTERVAL_MS,
            ..MenuConfig::default()
        };
        assert!(menu.validate().is_ok());
    }

    #[test]
    fn test_partial_palette_override_keeps_light_values() {
        let config = Config::from_yaml("palette:\n  primary: \"#ff0000\"\n").unwrap();
        let palette = config.palette();
        assert_eq!(palette.primary, "#ff0000");
        assert_eq!(palette.text, Palette::light().text);
        assert_eq!(palette.divider, Palette::light().divider);
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = Config::from_yaml("menu: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }

    #[test]
    fn test_yaml_roundtrip_preserves_overrides() {
        let mut config = Config::default();
        config.menu.anchor_gap = 12.0;
        config.theme = ThemeMode::Dark;
        let parsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
