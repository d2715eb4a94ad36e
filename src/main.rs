//! Paintgrid CLI - Layer Compositing Canvas
//!
//! Command-line interface for the Paintgrid painting core.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use paintgrid::cli::{commands, Cli, Commands};
use paintgrid::config::CanvasConfig;
use paintgrid::layers::LayerCatalog;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Paintgrid v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Layers => commands::list_layers(&LayerCatalog::builtin())?,
        Commands::Replay {
            script,
            config,
            style,
            width,
            height,
            timestamp,
        } => {
            let mut canvas = match &config {
                Some(path) => CanvasConfig::load(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => CanvasConfig::default(),
            };
            if let Some(style) = style {
                canvas.draw_style = style;
            }
            if let Some(width) = width {
                canvas.width = width;
            }
            if let Some(height) = height {
                canvas.height = height;
            }
            canvas.validate()?;

            commands::replay(&canvas, &script, timestamp)
                .with_context(|| format!("replaying {}", script.display()))?;
        }
    }

    Ok(())
}
