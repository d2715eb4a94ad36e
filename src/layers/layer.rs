//! A single layer kind.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::Color;
use crate::error::{PaintError, Result};

/// Pixel transform: `(colour, timestamp, x, y) -> colour`
///
/// Must be a pure function of its inputs.
pub type ApplyFn = fn(Color, f64, usize, usize) -> Color;

/// An immutable, named colour effect
///
/// Two layers are equal iff they share the same index; the name and
/// transform are not compared.
#[derive(Clone)]
pub struct Layer {
    name: Arc<str>,
    index: usize,
    apply: ApplyFn,
}

impl Layer {
    /// Create a layer kind
    ///
    /// # Errors
    /// Returns `InvalidLayerName` if `name` has fewer than two characters;
    /// sequence stores rank layers by their first two characters.
    pub fn new(name: impl Into<String>, index: usize, apply: ApplyFn) -> Result<Self> {
        let name = name.into();
        if name.chars().count() < 2 {
            return Err(PaintError::InvalidLayerName { name });
        }
        Ok(Self {
            name: Arc::from(name),
            index,
            apply,
        })
    }

    /// Built-in kinds whose names are known to be valid
    pub(super) fn builtin(name: &'static str, index: usize, apply: ApplyFn) -> Self {
        debug_assert!(name.chars().count() >= 2);
        Self {
            name: Arc::from(name),
            index,
            apply,
        }
    }

    /// Layer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable catalog index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Run the transform on one pixel
    pub fn apply(&self, color: Color, timestamp: f64, x: usize, y: usize) -> Color {
        (self.apply)(color, timestamp, x, y)
    }

    /// Ranking key built from the first two characters of the name
    ///
    /// `first * 1000 + second`, using the characters' code points.
    pub fn rank_key(&self) -> u64 {
        let mut codes = self.name.chars().map(|c| u64::from(u32::from(c)));
        let first = codes.next().unwrap_or(0);
        let second = codes.next().unwrap_or(0);
        first * 1000 + second
    }
}

impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Layer {}

impl Hash for Layer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("name", &self.name)
            .field("index", &self.index)
            .finish()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(color: Color, _: f64, _: usize, _: usize) -> Color {
        color
    }

    #[test]
    fn test_rejects_short_names() {
        let err = Layer::new("x", 0, identity).unwrap_err();
        assert!(matches!(err, PaintError::InvalidLayerName { .. }));
        assert!(Layer::new("", 0, identity).is_err());
        assert!(Layer::new("xy", 0, identity).is_ok());
    }

    #[test]
    fn test_equality_by_index() {
        let a = Layer::new("alpha", 3, identity).unwrap();
        let b = Layer::new("beta", 3, |_, _, _, _| Color::BLACK).unwrap();
        let c = Layer::new("alpha", 4, identity).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_rank_key() {
        let layer = Layer::new("ab", 0, identity).unwrap();
        assert_eq!(layer.rank_key(), 97 * 1000 + 98);

        let longer = Layer::new("abzzz", 1, identity).unwrap();
        assert_eq!(layer.rank_key(), longer.rank_key());
    }
}
