//! CLI Module
//!
//! Command-line interface for replaying painting scripts against a canvas.

pub mod commands;
pub mod script;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::DrawStyle;

/// Paintgrid - layer compositing canvas with undo/redo
#[derive(Parser, Debug)]
#[command(name = "paintgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available layer kinds
    #[command(name = "layers")]
    Layers,

    /// Run a painting script and print the resulting canvas
    #[command(name = "replay")]
    Replay {
        /// Script file, one command per line
        script: PathBuf,

        /// JSON canvas configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Draw style (SET, ADD or SEQUENCE), overrides the configuration
        #[arg(short, long)]
        style: Option<DrawStyle>,

        /// Canvas width, overrides the configuration
        #[arg(long)]
        width: Option<usize>,

        /// Canvas height, overrides the configuration
        #[arg(long)]
        height: Option<usize>,

        /// Timestamp passed to the layer transforms when rendering
        #[arg(short, long, default_value_t = 0.0)]
        timestamp: f64,
    },
}
