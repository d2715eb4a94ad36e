//! Paintgrid - Layer Compositing Canvas
//!
//! Each cell of a 2D canvas holds a small collection of layers, named
//! colour transforms, and answers "what colour is this pixel at this
//! time?". An undo/redo history replays or reverses painting actions.
//!
//! # Architecture
//!
//! - `layers`: colours, layer kinds and the built-in catalog
//! - `store`: the three per-cell composition policies (SET, ADD, SEQUENCE)
//! - `grid`: the canvas, one store per cell
//! - `action`: reversible paint actions
//! - `history`: bounded undo/redo over a single stack

pub mod action;
pub mod cli;
pub mod collections;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod layers;
pub mod store;

pub use action::{PaintAction, PaintStep, StepKind, Stroke};
pub use config::CanvasConfig;
pub use error::{PaintError, Result};
pub use grid::Grid;
pub use history::{SharedAction, UndoTracker};
pub use layers::{Color, Layer, LayerCatalog};
pub use store::{DrawStyle, LayerStore};
