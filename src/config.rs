use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use log::{info, warn};
use serde::{Deserialize, Deserializer};

use crate::command::RedoPolicy;
use crate::error::ConfigError;
use crate::shape::geometry;
use crate::tool::Tool;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "VECTOR_PAINT_CONFIG";

/// Canvas settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Stroke color of new shapes, as `#rrggbb`
    #[serde(deserialize_with = "deserialize_color")]
    pub default_color: Color32,
    #[serde(deserialize_with = "deserialize_color")]
    pub background: Color32,
    pub stroke_width: f32,
    pub arrow_pointer_length: f32,
    pub arrow_pointer_width: f32,
    pub initial_tool: Tool,
    pub redo_policy: RedoPolicy,
    /// Where the export button writes the PNG
    pub export_path: PathBuf,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_color: Color32::BLACK,
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            stroke_width: geometry::DEFAULT_STROKE_WIDTH,
            arrow_pointer_length: geometry::ARROW_POINTER_LENGTH,
            arrow_pointer_width: geometry::ARROW_POINTER_WIDTH,
            initial_tool: Tool::Select,
            redo_policy: RedoPolicy::SingleStep,
            export_path: PathBuf::from("canvas_image.png"),
        }
    }
}

impl CanvasConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file named by `VECTOR_PAINT_CONFIG`, or use defaults.
    /// A broken file is reported and ignored.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring config {}: {err}", Path::new(&path).display());
                Self::default()
            }
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color32, D::Error>
where
    D: Deserializer<'de>,
{
    let hex = String::deserialize(deserializer)?;
    Color32::from_hex(&hex)
        .map_err(|err| serde::de::Error::custom(format!("invalid color {hex:?}: {err:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(CanvasConfig::from_json("{}").unwrap(), CanvasConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = CanvasConfig::from_json(
            r##"{
                "default_color": "#ff0000",
                "background": "#ffffff",
                "stroke_width": 4.0,
                "initial_tool": "scribble",
                "redo_policy": "stacked",
                "export_path": "out/drawing.png"
            }"##,
        )
        .unwrap();
        assert_eq!(config.default_color, Color32::from_rgb(255, 0, 0));
        assert_eq!(config.background, Color32::WHITE);
        assert_eq!(config.stroke_width, 4.0);
        assert_eq!(config.initial_tool, Tool::Scribble);
        assert_eq!(config.redo_policy, RedoPolicy::Stacked);
        assert_eq!(config.export_path, PathBuf::from("out/drawing.png"));
        assert_eq!(config.arrow_pointer_length, geometry::ARROW_POINTER_LENGTH);
    }

    #[test]
    fn test_bad_color_is_an_error() {
        let err = CanvasConfig::from_json(r#"{"default_color": "red"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_tool_is_an_error() {
        assert!(CanvasConfig::from_json(r#"{"initial_tool": "eraser"}"#).is_err());
    }
}
