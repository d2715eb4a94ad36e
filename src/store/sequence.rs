//! SEQUENCE policy: each layer kind is either applied or not, in index order.

use log::{debug, warn};

use super::LayerStore;
use crate::collections::SortedList;
use crate::error::Result;
use crate::layers::{Color, Layer};

/// Set of layers keyed by index, applied in ascending index order
///
/// - add: ensure this kind is applied
/// - erase: ensure this kind is not applied
/// - special: remove the layer with the median name, taking the lower of
///   the two middle names when the count is even
#[derive(Debug, Clone)]
pub struct SequenceLayerStore {
    layers: SortedList<Layer>,
}

impl SequenceLayerStore {
    /// Create an empty store sized for `layer_count` kinds
    pub fn new(layer_count: usize) -> Self {
        Self {
            layers: SortedList::new(layer_count),
        }
    }

    /// Maximum number of layers
    pub fn capacity(&self) -> usize {
        self.layers.capacity()
    }

    /// Check if the kind of `layer` is currently applied
    pub fn contains(&self, layer: &Layer) -> bool {
        self.layers.contains_key(key(layer))
    }
}

fn key(layer: &Layer) -> u64 {
    layer.index() as u64
}

/// Position of the median in `n` ranked items; lower middle when `n` is even
fn median_position(n: usize) -> usize {
    if n % 2 == 0 {
        n / 2 - 1
    } else {
        n / 2
    }
}

impl LayerStore for SequenceLayerStore {
    fn add(&mut self, layer: &Layer) -> Result<bool> {
        if self.contains(layer) {
            return Ok(false);
        }
        self.layers.add(key(layer), layer.clone()).map_err(|err| {
            warn!("Rejected layer '{}': {}", layer.name(), err);
            err
        })?;
        Ok(true)
    }

    fn erase(&mut self, layer: &Layer) -> bool {
        match self.layers.position_of_key(key(layer)) {
            Some(position) => self.layers.remove_at(position).is_some(),
            None => false,
        }
    }

    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        self.layers
            .iter()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    fn special(&mut self) {
        if self.layers.is_empty() {
            return;
        }

        // Stable sort, so equal name prefixes stay in index order
        let mut ranked: Vec<&Layer> = self.layers.iter().collect();
        ranked.sort_by_key(|layer| layer.rank_key());

        let median = ranked[median_position(ranked.len())].clone();
        debug!("Removing median layer '{}'", median.name());
        self.erase(&median);
    }

    fn len(&self) -> usize {
        self.layers.len()
    }

    fn layers(&self) -> Vec<Layer> {
        self.layers.iter().cloned().collect()
    }

    fn boxed_clone(&self) -> Box<dyn LayerStore> {
        Box::new(self.clone())
    }
}
