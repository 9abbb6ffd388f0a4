//! Configuration file support for chitralekhan.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/chitralekhan/config.toml`. Settings include the initial stroke
//! style and tool, and the quality of the export rasterization.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, ResampleFilter, ToolSpec};
pub use types::{DrawingConfig, RenderConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_width = 4.0
/// default_alpha = 1.0
/// default_tool = "circle"
/// polygon_sides = 6
///
/// [render]
/// resample_filter = "best"
/// antialias = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial stroke style and tool
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Export rasterization settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 0.5 - 100.0
    /// - `default_alpha`: 0.0 - 1.0
    /// - `polygon_sides`: 3 - 12
    fn validate_and_clamp(&mut self) {
        let drawing = &mut self.drawing;

        if !(0.5..=100.0).contains(&drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 0.5-100.0 range",
                drawing.default_width
            );
            // NaN fails the range check and clamp() keeps it, so fall back explicitly.
            drawing.default_width = if drawing.default_width.is_nan() {
                4.0
            } else {
                drawing.default_width.clamp(0.5, 100.0)
            };
        }

        if !(0.0..=1.0).contains(&drawing.default_alpha) {
            log::warn!(
                "Invalid default_alpha {:.2}, clamping to 0.0-1.0 range",
                drawing.default_alpha
            );
            drawing.default_alpha = if drawing.default_alpha.is_nan() {
                1.0
            } else {
                drawing.default_alpha.clamp(0.0, 1.0)
            };
        }

        if !(3..=12).contains(&drawing.polygon_sides) {
            log::warn!(
                "Invalid polygon_sides {}, clamping to 3-12 range",
                drawing.polygon_sides
            );
            drawing.polygon_sides = drawing.polygon_sides.clamp(3, 12);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("chitralekhan");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the config file, for editors and tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;
    use crate::input::Tool;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.drawing.default_width, 4.0);
        assert_eq!(config.drawing.initial_tool(), Tool::FreeHand);
        assert_eq!(config.render.resample_filter, ResampleFilter::Good);
        assert!(config.render.antialias);
    }

    #[test]
    fn parses_full_config() {
        let file = write_config(
            r#"
[drawing]
default_color = [0, 0, 255]
default_width = 8.0
default_alpha = 0.5
default_tool = "polygon"
polygon_sides = 7

[render]
resample_filter = "nearest"
antialias = false
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        let style = config.drawing.initial_style();
        assert_eq!(style.color, Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(style.width, 8.0);
        assert_eq!(style.alpha, 0.5);
        assert_eq!(config.drawing.initial_tool(), Tool::Polygon { sides: 7 });

        let settings = config.render.settings();
        assert_eq!(settings.filter, cairo::Filter::Nearest);
        assert_eq!(settings.antialias, cairo::Antialias::None);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let file = write_config(
            r#"
[drawing]
default_width = 500.0
default_alpha = -1.0
polygon_sides = 40
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.drawing.default_width, 100.0);
        assert_eq!(config.drawing.default_alpha, 0.0);
        assert_eq!(config.drawing.polygon_sides, 12);
    }

    #[test]
    fn unknown_color_name_falls_back_to_red() {
        let spec = ColorSpec::Name("chartreuse".into());
        assert_eq!(spec.to_color(), crate::draw::color::RED);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let file = write_config("[drawing\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("drawing").is_some());
        assert!(properties.get("render").is_some());
    }
}
