//! Canvas Grid
//!
//! A width × height matrix of layer stores, one per cell, all using the
//! policy picked by the grid's draw style. Cells are addressed as
//! `(column, row)`.

use std::ops::{Index, IndexMut};

use log::debug;

use crate::error::{PaintError, Result};
use crate::layers::Color;
use crate::store::{new_store, DrawStyle, LayerStore};

/// Brush size of a freshly created grid
pub const DEFAULT_BRUSH_SIZE: usize = 2;

/// Smallest brush size
pub const MIN_BRUSH: usize = 0;

/// Largest brush size
pub const MAX_BRUSH: usize = 5;

/// Saved copies of some cells, see [`Grid::snapshot`]
#[derive(Debug)]
pub struct CellSnapshot {
    cells: Vec<(usize, Box<dyn LayerStore>)>,
}

impl CellSnapshot {
    /// Number of distinct cells saved
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The painting canvas
#[derive(Debug)]
pub struct Grid {
    draw_style: DrawStyle,
    width: usize,
    height: usize,
    brush_size: usize,
    /// Column-major: cell `(x, y)` lives at `x * height + y`
    cells: Vec<Box<dyn LayerStore>>,
    is_special: bool,
}

impl Grid {
    /// Create a grid whose cells all use `draw_style`
    ///
    /// `layer_count` is the size of the layer catalog.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` if either dimension is zero.
    pub fn new(draw_style: DrawStyle, width: usize, height: usize, layer_count: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidDimensions { width, height });
        }

        let cells = (0..width * height)
            .map(|_| new_store(draw_style, layer_count))
            .collect();

        debug!("Created {}x{} {} grid", width, height, draw_style);

        Ok(Self {
            draw_style,
            width,
            height,
            brush_size: DEFAULT_BRUSH_SIZE,
            cells,
            is_special: false,
        })
    }

    /// Start with a different brush size, clamped to `[MIN_BRUSH, MAX_BRUSH]`
    pub fn with_brush_size(mut self, brush_size: usize) -> Self {
        self.brush_size = brush_size.clamp(MIN_BRUSH, MAX_BRUSH);
        self
    }

    pub fn draw_style(&self) -> DrawStyle {
        self.draw_style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    /// Whether `special` has been triggered at least once
    pub fn is_special(&self) -> bool {
        self.is_special
    }

    /// Grow the brush by one, up to `MAX_BRUSH`
    pub fn increase_brush_size(&mut self) {
        if self.brush_size < MAX_BRUSH {
            self.brush_size += 1;
        }
    }

    /// Shrink the brush by one, down to `MIN_BRUSH`
    pub fn decrease_brush_size(&mut self) {
        if self.brush_size > MIN_BRUSH {
            self.brush_size -= 1;
        }
    }

    /// Run the special transform on every cell
    ///
    /// Each cell's transform is self-contained, so visiting order does not
    /// matter. Painting may continue afterwards.
    pub fn special(&mut self) {
        for cell in &mut self.cells {
            cell.special();
        }
        self.is_special = true;
        debug!("Applied {} special to {} cells", self.draw_style, self.cells.len());
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> PaintError {
        PaintError::CellOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// The store of cell `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Result<&dyn LayerStore> {
        let offset = self.offset(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        Ok(self.cells[offset].as_ref())
    }

    /// The store of cell `(x, y)`, mutably
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut (dyn LayerStore + 'static)> {
        let offset = self.offset(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        Ok(self.cells[offset].as_mut())
    }

    /// Colour of cell `(x, y)` for `start` at `timestamp`
    pub fn color_at(&self, x: usize, y: usize, start: Color, timestamp: f64) -> Result<Color> {
        Ok(self.cell(x, y)?.get_color(start, timestamp, x, y))
    }

    /// Cells covered by a brush dab centred on `(x, y)`
    ///
    /// Every in-bounds cell within Manhattan distance `brush_size`, in
    /// column-major order.
    pub fn brush_cells(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let reach = self.brush_size;
        let mut cells = Vec::new();
        let x_end = x.saturating_add(reach).min(self.width.saturating_sub(1));
        let y_end = y.saturating_add(reach).min(self.height.saturating_sub(1));
        for cx in x.saturating_sub(reach)..=x_end {
            for cy in y.saturating_sub(reach)..=y_end {
                if cx.abs_diff(x) + cy.abs_diff(y) <= reach {
                    cells.push((cx, cy));
                }
            }
        }
        cells
    }

    /// Copy the listed cells so they can be put back with `restore`
    ///
    /// Duplicate coordinates are saved once.
    ///
    /// # Errors
    /// Returns `CellOutOfBounds` for the first coordinate outside the grid.
    pub fn snapshot(&self, coords: impl IntoIterator<Item = (usize, usize)>) -> Result<CellSnapshot> {
        let mut offsets = Vec::new();
        for (x, y) in coords {
            offsets.push(self.offset(x, y).ok_or_else(|| self.out_of_bounds(x, y))?);
        }
        offsets.sort_unstable();
        offsets.dedup();

        let cells = offsets
            .into_iter()
            .map(|offset| (offset, self.cells[offset].boxed_clone()))
            .collect();
        Ok(CellSnapshot { cells })
    }

    /// Put back every cell saved in `snapshot`
    pub fn restore(&mut self, snapshot: CellSnapshot) {
        debug!("Restoring {} cell(s)", snapshot.len());
        for (offset, store) in snapshot.cells {
            self.cells[offset] = store;
        }
    }

    /// Colours of the whole canvas, row by row
    pub fn render(&self, start: Color, timestamp: f64) -> Vec<Color> {
        let mut colors = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                colors.push(self[(x, y)].get_color(start, timestamp, x, y));
            }
        }
        colors
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = dyn LayerStore;

    /// # Panics
    /// Panics if `(x, y)` is outside the grid.
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        match self.offset(x, y) {
            Some(offset) => self.cells[offset].as_ref(),
            None => panic!("{}", self.out_of_bounds(x, y)),
        }
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        match self.offset(x, y) {
            Some(offset) => self.cells[offset].as_mut(),
            None => panic!("{}", self.out_of_bounds(x, y)),
        }
    }
}
