//! ADD policy: layers stack up and are applied in insertion order.

use log::{debug, warn};

use super::LayerStore;
use crate::collections::{ArrayStack, CircularQueue};
use crate::error::Result;
use crate::layers::{Color, Layer};

/// Slots reserved per catalog layer kind
pub const ADDITIVE_SLOTS_PER_KIND: usize = 100;

/// Ordered multiset of layers, applied oldest first
///
/// - add: append a layer at the back; rejected with `StoreFull` at capacity
/// - erase: drop the oldest layer, whatever is passed in
/// - special: reverse the order of the held layers
#[derive(Debug, Clone)]
pub struct AdditiveLayerStore {
    layers: CircularQueue<Layer>,
}

impl AdditiveLayerStore {
    /// Create an empty store sized for `layer_count` kinds
    pub fn new(layer_count: usize) -> Self {
        Self {
            layers: CircularQueue::new(layer_count * ADDITIVE_SLOTS_PER_KIND),
        }
    }

    /// Maximum number of layers
    pub fn capacity(&self) -> usize {
        self.layers.capacity()
    }
}

impl LayerStore for AdditiveLayerStore {
    fn add(&mut self, layer: &Layer) -> Result<bool> {
        match self.layers.append(layer.clone()) {
            Ok(()) => Ok(true),
            Err(err) => {
                warn!("Rejected layer '{}': {}", layer.name(), err);
                Err(err)
            }
        }
    }

    /// Changed iff the store was non-empty before the call
    fn erase(&mut self, _layer: &Layer) -> bool {
        self.layers.serve().is_some()
    }

    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        self.layers
            .iter()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    fn special(&mut self) {
        let mut buffer = ArrayStack::new(self.layers.len());
        while let Some(layer) = self.layers.serve() {
            buffer.push(layer);
        }
        while let Some(layer) = buffer.pop_discard() {
            let refilled = self.layers.append(layer);
            debug_assert!(refilled.is_ok(), "queue was drained before refilling");
        }
        debug!("Reversed {} additive layers", self.layers.len());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaintError;
    use crate::store::test_layers::abc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capacity_from_catalog() {
        assert_eq!(AdditiveLayerStore::new(10).capacity(), 1000);
    }

    #[test]
    fn test_applies_oldest_first() {
        let [a, b, c] = abc();
        let mut store = AdditiveLayerStore::new(3);
        for layer in [&a, &b, &c] {
            assert!(store.add(layer).unwrap());
        }

        let start = Color::new(1, 2, 3);
        let expected = c.apply(b.apply(a.apply(start, 0.0, 0, 0), 0.0, 0, 0), 0.0, 0, 0);
        assert_eq!(store.get_color(start, 0.0, 0, 0), expected);
        assert_eq!(expected, Color::new(22, 4, 200));
    }

    #[test]
    fn test_get_color_is_repeatable() {
        let [a, b, _] = abc();
        let mut store = AdditiveLayerStore::new(3);
        store.add(&a).unwrap();
        store.add(&b).unwrap();

        let start = Color::new(5, 5, 5);
        let first = store.get_color(start, 0.0, 0, 0);
        assert_eq!(store.get_color(start, 0.0, 0, 0), first);
        assert_eq!(store.layers(), vec![a, b]);
    }

    #[test]
    fn test_special_reverses() {
        let [a, b, c] = abc();
        let mut store = AdditiveLayerStore::new(3);
        for layer in [&a, &b, &c] {
            store.add(layer).unwrap();
        }
        store.special();

        assert_eq!(store.layers(), vec![c.clone(), b.clone(), a.clone()]);
        let start = Color::new(1, 2, 3);
        let expected = a.apply(b.apply(c.apply(start, 0.0, 0, 0), 0.0, 0, 0), 0.0, 0, 0);
        assert_eq!(store.get_color(start, 0.0, 0, 0), expected);
        assert_eq!(expected, Color::new(12, 4, 255));
    }

    #[test]
    fn test_erase_removes_oldest() {
        let [a, b, c] = abc();
        let mut store = AdditiveLayerStore::new(3);
        for layer in [&a, &b, &c] {
            store.add(layer).unwrap();
        }

        assert!(store.erase(&c));
        assert_eq!(store.layers(), vec![b.clone(), c.clone()]);
        assert!(store.erase(&c));
        assert!(store.erase(&c));
        assert!(!store.erase(&c));
    }

    #[test]
    fn test_duplicates_allowed() {
        let [a, _, _] = abc();
        let mut store = AdditiveLayerStore::new(1);
        store.add(&a).unwrap();
        store.add(&a).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_color(Color::BLACK, 0.0, 0, 0), Color::new(20, 0, 0));
    }

    #[test]
    fn test_full_store_rejects_newest() {
        let [a, b, _] = abc();
        let mut store = AdditiveLayerStore::new(1);
        for _ in 0..ADDITIVE_SLOTS_PER_KIND {
            store.add(&a).unwrap();
        }

        let err = store.add(&b).unwrap_err();
        assert!(matches!(err, PaintError::StoreFull { capacity: 100 }));
        assert_eq!(store.len(), ADDITIVE_SLOTS_PER_KIND);
        assert!(store.layers().iter().all(|layer| *layer == a));
    }
}
