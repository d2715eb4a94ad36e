//! Paint Actions
//!
//! A paint action records what a single painting gesture changed so the
//! undo history can reverse or replay it. `Stroke` is the action recorded
//! by brush dabs and by the grid-wide special.

use std::fmt;

use chrono::{DateTime, Utc};
use log::warn;
use uuid::Uuid;

use crate::error::{PaintError, Result};
use crate::grid::Grid;
use crate::layers::Layer;

/// A reversible painting command
///
/// Replays are all-or-nothing: when `undo_apply` or `redo_apply` fails,
/// the grid must be left as it was before the call.
pub trait PaintAction: fmt::Debug + Send + Sync {
    /// Unique identifier of this action
    fn id(&self) -> Uuid;

    /// When the action was recorded
    fn created_at(&self) -> DateTime<Utc>;

    /// Reverse this action's effect on `grid`
    fn undo_apply(&self, grid: &mut Grid) -> Result<()>;

    /// Re-apply this action's effect on `grid`
    fn redo_apply(&self, grid: &mut Grid) -> Result<()>;

    /// Short human-readable summary
    fn description(&self) -> String;
}

/// What a step did to its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Paint,
    Erase,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Paint => write!(f, "paint"),
            StepKind::Erase => write!(f, "erase"),
        }
    }
}

/// One cell touched by a stroke
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStep {
    pub x: usize,
    pub y: usize,
    pub layer: Layer,
    pub kind: StepKind,
}

impl PaintStep {
    pub fn new(x: usize, y: usize, layer: Layer, kind: StepKind) -> Self {
        Self { x, y, layer, kind }
    }

    fn forward(&self, grid: &mut Grid) -> Result<bool> {
        let cell = grid.cell_mut(self.x, self.y)?;
        match self.kind {
            StepKind::Paint => cell.add(&self.layer),
            StepKind::Erase => Ok(cell.erase(&self.layer)),
        }
    }

    fn inverse(&self, grid: &mut Grid) -> Result<bool> {
        let cell = grid.cell_mut(self.x, self.y)?;
        match self.kind {
            StepKind::Paint => Ok(cell.erase(&self.layer)),
            StepKind::Erase => cell.add(&self.layer),
        }
    }
}

/// A recorded brush gesture or grid-wide special
#[derive(Debug, Clone)]
pub struct Stroke {
    id: Uuid,
    created_at: DateTime<Utc>,
    steps: Vec<PaintStep>,
    is_special: bool,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new()
    }
}

impl Stroke {
    /// Create an empty stroke
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            steps: Vec::new(),
            is_special: false,
        }
    }

    /// Record a step without touching any grid
    pub fn with_step(mut self, step: PaintStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Paint `layer` with the grid's brush centred on `(x, y)`
    ///
    /// Only cells that actually changed are recorded. Cells whose store is
    /// full are skipped with a warning.
    ///
    /// # Errors
    /// Returns `CellOutOfBounds` if `(x, y)` is outside the grid.
    pub fn paint(grid: &mut Grid, x: usize, y: usize, layer: &Layer) -> Result<Self> {
        Self::dab(grid, x, y, layer, StepKind::Paint)
    }

    /// Erase with the grid's brush centred on `(x, y)`
    ///
    /// # Errors
    /// Returns `CellOutOfBounds` if `(x, y)` is outside the grid.
    pub fn erase(grid: &mut Grid, x: usize, y: usize, layer: &Layer) -> Result<Self> {
        Self::dab(grid, x, y, layer, StepKind::Erase)
    }

    /// Trigger the grid-wide special and record it
    pub fn special(grid: &mut Grid) -> Self {
        grid.special();
        Self {
            is_special: true,
            ..Self::new()
        }
    }

    fn dab(grid: &mut Grid, x: usize, y: usize, layer: &Layer, kind: StepKind) -> Result<Self> {
        grid.cell(x, y)?;
        let mut stroke = Self::new();
        for (cx, cy) in grid.brush_cells(x, y) {
            let step = PaintStep::new(cx, cy, layer.clone(), kind);
            match step.forward(grid) {
                Ok(true) => stroke.steps.push(step),
                Ok(false) => {}
                Err(err @ PaintError::StoreFull { .. }) => {
                    warn!("Skipped cell ({}, {}): {}", cx, cy, err);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(stroke)
    }

    pub fn steps(&self) -> &[PaintStep] {
        &self.steps
    }

    pub fn is_special(&self) -> bool {
        self.is_special
    }

    /// True if the stroke changed nothing
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && !self.is_special
    }

    /// Run `replay` over the stroke's cells, restoring them if it fails
    fn replay_atomically(
        &self,
        grid: &mut Grid,
        replay: impl FnOnce(&mut Grid) -> Result<()>,
    ) -> Result<()> {
        let saved = grid.snapshot(self.steps.iter().map(|step| (step.x, step.y)))?;
        if let Err(err) = replay(grid) {
            warn!("Rolling back {} ({}): {}", self.description(), self.id, err);
            grid.restore(saved);
            return Err(err);
        }
        Ok(())
    }
}

impl PaintAction for Stroke {
    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn undo_apply(&self, grid: &mut Grid) -> Result<()> {
        if self.is_special {
            grid.special();
            return Ok(());
        }
        self.replay_atomically(grid, |grid| {
            for step in self.steps.iter().rev() {
                step.inverse(grid)?;
            }
            Ok(())
        })
    }

    fn redo_apply(&self, grid: &mut Grid) -> Result<()> {
        if self.is_special {
            grid.special();
            return Ok(());
        }
        self.replay_atomically(grid, |grid| {
            for step in &self.steps {
                step.forward(grid)?;
            }
            Ok(())
        })
    }

    fn description(&self) -> String {
        if self.is_special {
            return "special".to_string();
        }
        match self.steps.first() {
            Some(first) => format!(
                "{} {} on {} cell(s)",
                first.kind,
                first.layer.name(),
                self.steps.len()
            ),
            None => "empty stroke".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{Color, LayerCatalog};
    use crate::store::DrawStyle;
    use pretty_assertions::assert_eq;

    fn setup(style: DrawStyle) -> (Grid, LayerCatalog) {
        let catalog = LayerCatalog::builtin();
        let grid = Grid::new(style, 5, 5, catalog.len()).unwrap().with_brush_size(1);
        (grid, catalog)
    }

    #[test]
    fn test_paint_records_changed_cells() {
        let (mut grid, catalog) = setup(DrawStyle::Sequence);
        let black = catalog.by_name("black").unwrap();

        let first = Stroke::paint(&mut grid, 2, 2, black).unwrap();
        assert_eq!(first.steps().len(), 5);

        // Sequence cells already hold black, nothing changes
        let second = Stroke::paint(&mut grid, 2, 2, black).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_undo_then_redo() {
        let (mut grid, catalog) = setup(DrawStyle::Add);
        let black = catalog.by_name("black").unwrap();

        let stroke = Stroke::paint(&mut grid, 0, 0, black).unwrap();
        assert_eq!(grid.color_at(0, 1, Color::WHITE, 0.0).unwrap(), Color::BLACK);

        stroke.undo_apply(&mut grid).unwrap();
        assert!(grid.cell(0, 1).unwrap().is_empty());
        assert_eq!(grid.color_at(0, 1, Color::WHITE, 0.0).unwrap(), Color::WHITE);

        stroke.redo_apply(&mut grid).unwrap();
        assert_eq!(grid.color_at(0, 1, Color::WHITE, 0.0).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_erase_undo_restores_layer() {
        let (mut grid, catalog) = setup(DrawStyle::Sequence);
        let red = catalog.by_name("red").unwrap();
        Stroke::paint(&mut grid, 2, 2, red).unwrap();

        let erase = Stroke::erase(&mut grid, 2, 2, red).unwrap();
        assert_eq!(erase.steps().len(), 5);
        assert!(grid.cell(2, 2).unwrap().is_empty());

        erase.undo_apply(&mut grid).unwrap();
        assert_eq!(grid.cell(2, 2).unwrap().layers(), vec![red.clone()]);
    }

    #[test]
    fn test_special_stroke_toggles() {
        let (mut grid, catalog) = setup(DrawStyle::Set);
        Stroke::paint(&mut grid, 2, 2, catalog.by_name("black").unwrap()).unwrap();

        let special = Stroke::special(&mut grid);
        assert!(special.is_special());
        assert_eq!(grid.color_at(2, 2, Color::WHITE, 0.0).unwrap(), Color::WHITE);

        special.undo_apply(&mut grid).unwrap();
        assert_eq!(grid.color_at(2, 2, Color::WHITE, 0.0).unwrap(), Color::BLACK);
        assert_eq!(special.description(), "special");
    }

    #[test]
    fn test_description() {
        let (mut grid, catalog) = setup(DrawStyle::Set);
        let stroke = Stroke::paint(&mut grid, 0, 0, catalog.by_name("blue").unwrap()).unwrap();
        assert_eq!(stroke.description(), "paint blue on 3 cell(s)");
        assert_eq!(Stroke::new().description(), "empty stroke");
    }

    #[test]
    fn test_paint_outside_grid_fails() {
        let (mut grid, catalog) = setup(DrawStyle::Set);
        let black = catalog.by_name("black").unwrap();

        let err = Stroke::paint(&mut grid, 100, 100, black).unwrap_err();
        assert!(matches!(err, PaintError::CellOutOfBounds { x: 100, y: 100, .. }));
        // A centre just off the edge must not paint the neighbouring cells
        assert!(Stroke::erase(&mut grid, 5, 0, black).is_err());
        assert!(grid.render(Color::WHITE, 0.0).iter().all(|c| *c == Color::WHITE));
    }

    #[test]
    fn test_failed_undo_rolls_back_earlier_cells() {
        let catalog = LayerCatalog::builtin();
        let black = catalog.by_name("black").unwrap();
        let red = catalog.by_name("red").unwrap();
        let mut grid = Grid::new(DrawStyle::Add, 3, 1, catalog.len())
            .unwrap()
            .with_brush_size(1);

        Stroke::paint(&mut grid, 1, 0, black).unwrap();
        let erase = Stroke::erase(&mut grid, 1, 0, black).unwrap();
        assert_eq!(erase.steps().len(), 3);

        // Fill (0, 0) so restoring its layer fails after (2, 0) and (1, 0)
        // have already been restored
        while grid[(0, 0)].add(red).is_ok() {}
        let full = grid[(0, 0)].len();

        let err = erase.undo_apply(&mut grid).unwrap_err();
        assert!(matches!(err, PaintError::StoreFull { .. }));
        assert!(grid[(1, 0)].is_empty());
        assert!(grid[(2, 0)].is_empty());
        assert_eq!(grid[(0, 0)].len(), full);

        // Retrying once there is room restores each cell exactly once
        grid[(0, 0)].erase(red);
        erase.undo_apply(&mut grid).unwrap();
        assert_eq!(grid[(1, 0)].layers(), vec![black.clone()]);
        assert_eq!(grid[(2, 0)].layers(), vec![black.clone()]);
        assert_eq!(grid[(0, 0)].len(), full);
    }

    #[test]
    fn test_stroke_identity() {
        let before = chrono::Utc::now();
        let first = Stroke::new();
        let second = Stroke::new();
        assert_ne!(first.id(), second.id());
        assert!(first.created_at() >= before);
        assert!(second.created_at() >= first.created_at());
        // Clones keep the identity of the recorded gesture
        assert_eq!(first.clone().id(), first.id());
    }

    #[test]
    fn test_replay_out_of_bounds_step_fails() {
        let (mut grid, catalog) = setup(DrawStyle::Set);
        let stroke = Stroke::new().with_step(PaintStep::new(
            9,
            9,
            catalog.by_name("red").unwrap().clone(),
            StepKind::Paint,
        ));
        let err = stroke.redo_apply(&mut grid).unwrap_err();
        assert!(matches!(err, PaintError::CellOutOfBounds { .. }));
    }
}
