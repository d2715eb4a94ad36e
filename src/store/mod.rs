//! Layer Stores
//!
//! Every grid cell owns one store. The draw style picks the composition
//! policy once, when the grid is built:
//! - SET: a single layer, special inverts the output
//! - ADD: layers applied oldest first, special reverses their order
//! - SEQUENCE: each kind on or off, applied by index, special removes the
//!   median-named layer

mod additive;
mod sequence;
mod set;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};
use crate::layers::{Color, Layer};

pub use additive::{AdditiveLayerStore, ADDITIVE_SLOTS_PER_KIND};
pub use sequence::SequenceLayerStore;
pub use set::SetLayerStore;

/// Capability surface shared by all store policies
pub trait LayerStore: fmt::Debug + Send + Sync {
    /// Add a layer
    ///
    /// Returns `Ok(true)` if the store actually changed.
    ///
    /// # Errors
    /// Returns `StoreFull` when the store cannot take another layer. The
    /// new layer is rejected and the store is left as it was.
    fn add(&mut self, layer: &Layer) -> Result<bool>;

    /// Apply the store's erase policy
    ///
    /// Returns true if the store actually changed.
    fn erase(&mut self, layer: &Layer) -> bool;

    /// Colour of this cell for `start` at `timestamp`
    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color;

    /// Store-specific special transform
    fn special(&mut self);

    /// Number of layers held
    fn len(&self) -> usize;

    /// Check if no layer is held
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Held layers in composition order
    fn layers(&self) -> Vec<Layer>;

    /// Copy this store, including its special state
    fn boxed_clone(&self) -> Box<dyn LayerStore>;
}

/// Composition policy shared by every cell of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DrawStyle {
    #[default]
    Set,
    Add,
    Sequence,
}

impl DrawStyle {
    /// All draw styles
    pub const ALL: [DrawStyle; 3] = [DrawStyle::Set, DrawStyle::Add, DrawStyle::Sequence];
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawStyle::Set => write!(f, "SET"),
            DrawStyle::Add => write!(f, "ADD"),
            DrawStyle::Sequence => write!(f, "SEQUENCE"),
        }
    }
}

impl FromStr for DrawStyle {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self> {
        DrawStyle::ALL
            .into_iter()
            .find(|style| style.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaintError::InvalidDrawStyle {
                style: s.to_string(),
            })
    }
}

/// Create an empty store for `style`
///
/// `layer_count` is the number of kinds in the catalog and sizes the
/// additive and sequence stores.
pub fn new_store(style: DrawStyle, layer_count: usize) -> Box<dyn LayerStore> {
    match style {
        DrawStyle::Set => Box::new(SetLayerStore::new()),
        DrawStyle::Add => Box::new(AdditiveLayerStore::new(layer_count)),
        DrawStyle::Sequence => Box::new(SequenceLayerStore::new(layer_count)),
    }
}
