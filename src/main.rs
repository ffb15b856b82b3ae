//! Graph Analyzer - Function Plotter with Overlaid Curves
//!
//! Type a formula in `x`, press Add, and its curve is drawn on the grid with a
//! color-coded legend entry.

mod gui;

use anyhow::{anyhow, Result};
use eframe::egui;
use graph_analyzer::AppConfig;
use gui::GraphAnalyzerApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("graph_analyzer=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {}", err))?;

    let config = AppConfig::load();
    tracing::info!("Starting Graph Analyzer");

    // Configure native options
    let window = config.window.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window.inner_size)
            .with_min_inner_size(window.min_inner_size)
            .with_title(window.title.as_str()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        &window.title,
        options,
        Box::new(|cc| Ok(Box::new(GraphAnalyzerApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("window error: {}", err))?;

    tracing::info!("Graph Analyzer exited");
    Ok(())
}
