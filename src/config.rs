//! Canvas Configuration
//!
//! Settings for a painting session, read from JSON. Missing fields fall
//! back to their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};
use crate::grid::{Grid, DEFAULT_BRUSH_SIZE, MAX_BRUSH};
use crate::history::{UndoTracker, DEFAULT_HISTORY_CAPACITY};
use crate::layers::{Color, LayerCatalog};
use crate::store::DrawStyle;

/// Default canvas width and height
pub const DEFAULT_CANVAS_SIZE: usize = 32;

/// Default colour canvases are rendered over
pub const DEFAULT_BACKGROUND: Color = Color::WHITE;

/// Settings for one canvas session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Composition policy for every cell
    pub draw_style: DrawStyle,
    pub width: usize,
    pub height: usize,
    /// Maximum number of undoable actions
    pub history_capacity: usize,
    /// Brush size the grid starts with
    pub default_brush: usize,
    /// Start colour fed to every cell when rendering
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            draw_style: DrawStyle::default(),
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            default_brush: DEFAULT_BRUSH_SIZE,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that the settings describe a usable canvas
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PaintError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.history_capacity == 0 {
            return Err(PaintError::InvalidConfig {
                reason: "history_capacity must be at least 1".to_string(),
            });
        }
        if self.default_brush > MAX_BRUSH {
            return Err(PaintError::InvalidConfig {
                reason: format!(
                    "default_brush {} exceeds maximum of {}",
                    self.default_brush, MAX_BRUSH
                ),
            });
        }
        Ok(())
    }

    /// Build the grid and undo history for a session
    pub fn build(&self, catalog: &LayerCatalog) -> Result<(Grid, UndoTracker)> {
        self.validate()?;
        let grid = Grid::new(self.draw_style, self.width, self.height, catalog.len())?
            .with_brush_size(self.default_brush);
        let tracker = UndoTracker::with_capacity(self.history_capacity);
        Ok((grid, tracker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert_eq!(config.draw_style, DrawStyle::Set);
        assert_eq!(config.history_capacity, 10_000);
        assert_eq!(config.default_brush, 2);
        assert_eq!(config.background, Color::WHITE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CanvasConfig::from_json_str(r#"{"draw_style": "SEQUENCE", "width": 8}"#).unwrap();
        assert_eq!(
            config,
            CanvasConfig {
                draw_style: DrawStyle::Sequence,
                width: 8,
                ..CanvasConfig::default()
            }
        );
    }

    #[test]
    fn test_background_from_json() {
        let config =
            CanvasConfig::from_json_str(r#"{"background": {"r": 0, "g": 0, "b": 0}}"#).unwrap();
        assert_eq!(config.background, Color::BLACK);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CanvasConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            CanvasConfig::from_json_str(r#"{"height": 0}"#),
            Err(PaintError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            CanvasConfig::from_json_str(r#"{"history_capacity": 0}"#),
            Err(PaintError::InvalidConfig { .. })
        ));
        assert!(matches!(
            CanvasConfig::from_json_str(r#"{"default_brush": 6}"#),
            Err(PaintError::InvalidConfig { .. })
        ));
        assert!(matches!(
            CanvasConfig::from_json_str(r#"{"draw_style": "SPRAY"}"#),
            Err(PaintError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"draw_style": "ADD", "width": 4, "height": 3, "default_brush": 0}}"#).unwrap();

        let config = CanvasConfig::load(file.path()).unwrap();
        let (grid, tracker) = config.build(&LayerCatalog::builtin()).unwrap();
        assert_eq!(grid.draw_style(), DrawStyle::Add);
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.brush_size(), 0);
        assert_eq!(tracker.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CanvasConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
