//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use super::script::{parse_script, ScriptCommand};
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::UndoTracker;
use crate::layers::{Color, LayerCatalog};
use crate::action::Stroke;

/// A live painting session: one grid and its history
#[derive(Debug)]
pub struct Session {
    catalog: LayerCatalog,
    grid: Grid,
    tracker: UndoTracker,
    background: Color,
}

impl Session {
    /// Start a session from a validated configuration
    pub fn new(config: &CanvasConfig, catalog: LayerCatalog) -> Result<Self> {
        let (grid, tracker) = config.build(&catalog)?;
        Ok(Self {
            catalog,
            grid,
            tracker,
            background: config.background,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tracker(&self) -> &UndoTracker {
        &self.tracker
    }

    /// Run one script command
    pub fn execute(&mut self, command: &ScriptCommand) -> Result<()> {
        match command {
            ScriptCommand::Paint { x, y, layer } => {
                let layer = self.catalog.by_name(layer)?;
                let stroke = Stroke::paint(&mut self.grid, *x, *y, layer)?;
                self.record(stroke);
            }
            ScriptCommand::Erase { x, y, layer } => {
                let layer = self.catalog.by_name(layer)?;
                let stroke = Stroke::erase(&mut self.grid, *x, *y, layer)?;
                self.record(stroke);
            }
            ScriptCommand::Special => {
                let stroke = Stroke::special(&mut self.grid);
                self.record(stroke);
            }
            ScriptCommand::Undo => {
                if self.tracker.undo(&mut self.grid)?.is_none() {
                    info!("Nothing to undo");
                }
            }
            ScriptCommand::Redo => {
                if self.tracker.redo(&mut self.grid)?.is_none() {
                    info!("Nothing to redo");
                }
            }
            ScriptCommand::BrushUp => self.grid.increase_brush_size(),
            ScriptCommand::BrushDown => self.grid.decrease_brush_size(),
        }
        Ok(())
    }

    fn record(&mut self, stroke: Stroke) {
        if stroke.is_empty() {
            return;
        }
        if let Some(evicted) = self.tracker.add_action(Arc::new(stroke)) {
            warn!(
                "Dropped from history: {} ({})",
                evicted.description(),
                evicted.id()
            );
        }
    }

    /// Render the canvas as rows of hex colours
    pub fn render_rows(&self, timestamp: f64) -> Vec<String> {
        let colors = self.grid.render(self.background, timestamp);
        colors
            .chunks(self.grid.width())
            .map(|row| {
                row.iter()
                    .map(Color::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

/// Print the layer catalog.
pub fn list_layers(catalog: &LayerCatalog) -> Result<()> {
    for layer in catalog.iter() {
        println!("{:>3}  {}", layer.index(), layer.name());
    }
    Ok(())
}

/// Run a painting script and print the resulting canvas.
pub fn replay(config: &CanvasConfig, script: &Path, timestamp: f64) -> Result<()> {
    info!("Replaying {} on a {} canvas", script.display(), config.draw_style);

    let source = fs::read_to_string(script)?;
    let commands = parse_script(&source)?;

    let mut session = Session::new(config, LayerCatalog::builtin())?;
    for command in &commands {
        session.execute(command)?;
    }

    info!(
        "Executed {} command(s), {} undoable action(s)",
        commands.len(),
        session.tracker().len()
    );
    for row in session.render_rows(timestamp) {
        println!("{}", row);
    }
    Ok(())
}
