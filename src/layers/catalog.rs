//! Catalog of available layer kinds.

use super::{ApplyFn, Color, Layer};
use crate::error::{PaintError, Result};

/// Amount added or removed by lighten/darken
const SHADE_STEP: u8 = 40;

/// Built-in kinds in index order
const BUILTIN_LAYERS: [(&str, ApplyFn); 10] = [
    ("rainbow", rainbow),
    ("black", black),
    ("lighten", lighten),
    ("invert", invert),
    ("red", red),
    ("green", green),
    ("blue", blue),
    ("greyscale", greyscale),
    ("sparkle", sparkle),
    ("darken", darken),
];

/// Ordered set of layer kinds known to a canvas
///
/// `len()` determines the capacity of additive (`len * 100`) and sequence
/// (`len`) stores.
#[derive(Debug, Clone)]
pub struct LayerCatalog {
    layers: Vec<Layer>,
}

impl LayerCatalog {
    /// Build a catalog from arbitrary layers
    ///
    /// # Errors
    /// Indices must be exactly `0..layers.len()`, in any order.
    pub fn new(mut layers: Vec<Layer>) -> Result<Self> {
        layers.sort_by_key(Layer::index);
        for (position, layer) in layers.iter().enumerate() {
            if layer.index() != position {
                return Err(PaintError::InvalidConfig {
                    reason: format!(
                        "layer '{}' has index {}, expected {}",
                        layer.name(),
                        layer.index(),
                        position
                    ),
                });
            }
        }
        Ok(Self { layers })
    }

    /// The built-in layer kinds
    pub fn builtin() -> Self {
        let layers = BUILTIN_LAYERS
            .iter()
            .enumerate()
            .map(|(index, &(name, apply))| Layer::builtin(name, index, apply))
            .collect();
        Self { layers }
    }

    /// Number of layer kinds
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Look up a layer by index
    pub fn get(&self, index: usize) -> Result<&Layer> {
        self.layers
            .get(index)
            .ok_or(PaintError::UnknownLayerIndex { index })
    }

    /// Look up a layer by name (case-insensitive)
    pub fn by_name(&self, name: &str) -> Result<&Layer> {
        self.layers
            .iter()
            .find(|layer| layer.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| PaintError::UnknownLayer {
                name: name.to_string(),
            })
    }

    /// Iterate layers in index order
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }
}

impl Default for LayerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// Built-in transforms

fn rainbow(_: Color, timestamp: f64, x: usize, y: usize) -> Color {
    let hue = (x + y) as f64 * 15.0 + timestamp * 60.0;
    hue_to_rgb(hue)
}

fn black(_: Color, _: f64, _: usize, _: usize) -> Color {
    Color::BLACK
}

fn lighten(start: Color, _: f64, _: usize, _: usize) -> Color {
    start.map(|c| c.saturating_add(SHADE_STEP))
}

fn invert(start: Color, _: f64, _: usize, _: usize) -> Color {
    start.inverted()
}

fn red(_: Color, _: f64, _: usize, _: usize) -> Color {
    Color::new(255, 0, 0)
}

fn green(_: Color, _: f64, _: usize, _: usize) -> Color {
    Color::new(0, 255, 0)
}

fn blue(_: Color, _: f64, _: usize, _: usize) -> Color {
    Color::new(0, 0, 255)
}

fn greyscale(start: Color, _: f64, _: usize, _: usize) -> Color {
    let sum = u16::from(start.r) + u16::from(start.g) + u16::from(start.b);
    let grey = (sum / 3) as u8;
    Color::new(grey, grey, grey)
}

/// Period of the sparkle pattern, in cells and in whole seconds
const SPARKLE_PERIOD: usize = 7;

fn sparkle(start: Color, timestamp: f64, x: usize, y: usize) -> Color {
    // Reduce every term first so huge coordinates or timestamps cannot overflow
    let period = SPARKLE_PERIOD as f64;
    let tick = (timestamp.max(0.0) % period) as usize;
    let phase = (x % SPARKLE_PERIOD) * 31 + (y % SPARKLE_PERIOD) * 17 + tick;
    if phase % SPARKLE_PERIOD == 0 {
        Color::WHITE
    } else {
        start
    }
}

fn darken(start: Color, _: f64, _: usize, _: usize) -> Color {
    start.map(|c| c.saturating_sub(SHADE_STEP))
}

/// Fully saturated, full-value colour for `hue` in degrees
fn hue_to_rgb(hue: f64) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    let to_channel = |v: f64| (v * 255.0).round() as u8;
    Color::new(to_channel(r), to_channel(g), to_channel(b))
}
