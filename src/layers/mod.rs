//! Layer Module
//!
//! Layers are named, indexed, pure colour transforms. The catalog lists the
//! kinds available to a canvas and sizes the per-cell stores.

mod catalog;
mod color;
mod layer;

pub use catalog::LayerCatalog;
pub use color::Color;
pub use layer::{ApplyFn, Layer};
