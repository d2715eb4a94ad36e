//! SET policy: at most one layer, special inverts the output.

use super::LayerStore;
use crate::error::Result;
use crate::layers::{Color, Layer};

/// Holds a single layer, or nothing
///
/// - add: replace the held layer
/// - erase: clear the held layer, whatever is passed in
/// - special: toggle inversion of the output colour
#[derive(Debug, Clone, Default)]
pub struct SetLayerStore {
    layer: Option<Layer>,
    inverted: bool,
}

impl SetLayerStore {
    /// Create an empty, non-inverted store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether output is currently inverted
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl LayerStore for SetLayerStore {
    fn add(&mut self, layer: &Layer) -> Result<bool> {
        self.layer = Some(layer.clone());
        Ok(true)
    }

    fn erase(&mut self, _layer: &Layer) -> bool {
        self.layer = None;
        true
    }

    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        let Some(layer) = &self.layer else {
            return start;
        };
        let color = layer.apply(start, timestamp, x, y);
        if self.inverted {
            color.inverted()
        } else {
            color
        }
    }

    fn special(&mut self) {
        self.inverted = !self.inverted;
    }

    fn len(&self) -> usize {
        usize::from(self.layer.is_some())
    }

    fn layers(&self) -> Vec<Layer> {
        self.layer.iter().cloned().collect()
    }

    fn boxed_clone(&self) -> Box<dyn LayerStore> {
        Box::new(self.clone())
    }
}
