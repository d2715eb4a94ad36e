//! Error handling for Paintgrid
//!
//! Capacity and lookup problems are reported as values, never panics.
//! No-op conditions (empty history, brush at bound) are not errors at all.

use thiserror::Error;

/// Result type alias for Paintgrid operations
pub type Result<T> = std::result::Result<T, PaintError>;

/// Main error type for Paintgrid operations
#[derive(Error, Debug)]
pub enum PaintError {
    // Layer Errors
    #[error("Invalid layer name {name:?}: layer names need at least two characters")]
    InvalidLayerName { name: String },

    #[error("Unknown layer: {name}")]
    UnknownLayer { name: String },

    #[error("Unknown layer index: {index}")]
    UnknownLayerIndex { index: usize },

    // Capacity Errors
    #[error("Layer store is full (capacity {capacity})")]
    StoreFull { capacity: usize },

    // Grid Errors
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Unknown draw style: {style}")]
    InvalidDrawStyle { style: String },

    // Configuration Errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Line {line}: {reason}")]
    InvalidCommand { line: usize, reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PaintError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            PaintError::InvalidLayerName { .. } => "INVALID_LAYER_NAME",
            PaintError::UnknownLayer { .. } => "UNKNOWN_LAYER",
            PaintError::UnknownLayerIndex { .. } => "UNKNOWN_LAYER_INDEX",
            PaintError::StoreFull { .. } => "STORE_FULL",
            PaintError::CellOutOfBounds { .. } => "CELL_OUT_OF_BOUNDS",
            PaintError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            PaintError::InvalidDrawStyle { .. } => "INVALID_DRAW_STYLE",
            PaintError::InvalidConfig { .. } => "INVALID_CONFIG",
            PaintError::InvalidCommand { .. } => "INVALID_COMMAND",
            PaintError::Io(_) => "IO_ERROR",
            PaintError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// A full store leaves the store untouched, so painting can simply continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaintError::StoreFull { .. }
                | PaintError::CellOutOfBounds { .. }
                | PaintError::UnknownLayer { .. }
                | PaintError::UnknownLayerIndex { .. }
        )
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            PaintError::InvalidLayerName { .. } => Some("Give the layer a name of two or more characters."),
            PaintError::UnknownLayer { .. } => Some("Run 'paintgrid-cli layers' to list available layers."),
            PaintError::StoreFull { .. } => Some("Erase some layers from this cell before painting again."),
            PaintError::CellOutOfBounds { .. } => Some("Paint inside the canvas bounds."),
            PaintError::InvalidDrawStyle { .. } => Some("Use one of SET, ADD or SEQUENCE."),
            PaintError::InvalidDimensions { .. } => Some("Width and height must both be at least 1."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PaintError::StoreFull { capacity: 10 };
        assert_eq!(err.error_code(), "STORE_FULL");
        assert!(err.is_recoverable());
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = PaintError::CellOutOfBounds {
            x: 4,
            y: 9,
            width: 3,
            height: 3,
        };
        assert_eq!(err.to_string(), "Cell (4, 9) is outside the 3x3 grid");
    }

    #[test]
    fn test_invalid_name_not_recoverable() {
        let err = PaintError::InvalidLayerName {
            name: "a".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.error_code(), "INVALID_LAYER_NAME");
    }
}
