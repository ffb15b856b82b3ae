//! Graph Analyzer Main Application
//! Main window with the plot viewer and the control panel.

use crate::gui::{ControlPanel, ControlPanelAction, PlotViewer, StatusKind};
use egui::TopBottomPanel;
use graph_analyzer::plot::PlotSurface;
use graph_analyzer::AppConfig;

/// Main application window.
pub struct GraphAnalyzerApp {
    surface: PlotSurface,
    control_panel: ControlPanel,
    plot_viewer: PlotViewer,
}

impl GraphAnalyzerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            surface: PlotSurface::new(),
            control_panel: ControlPanel::new(),
            plot_viewer: PlotViewer::new(config.plot),
        }
    }

    /// Compile the input and add it as a new curve.
    fn handle_add(&mut self) {
        let text = self.control_panel.input.trim().to_string();
        if text.is_empty() {
            self.control_panel
                .set_status(StatusKind::Info, "Enter a function first");
            return;
        }

        match self.surface.add_expression(&text) {
            Ok(entry) => {
                let status = format!("Added {}", entry.label);
                self.control_panel.input.clear();
                self.control_panel.set_status(StatusKind::Info, status);
            }
            Err(err) => {
                tracing::warn!(expression = %text, error = %err, "rejected expression");
                self.control_panel
                    .set_status(StatusKind::Error, format!("Error: {}", err));
            }
        }
    }

    fn handle_clear(&mut self) {
        self.surface.clear();
        self.control_panel.set_status(StatusKind::Info, "Cleared");
    }
}

impl eframe::App for GraphAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Bottom panel - Control Panel
        TopBottomPanel::bottom("control_panel").show(ctx, |ui| {
            match self.control_panel.show(ui) {
                ControlPanelAction::Add => self.handle_add(),
                ControlPanelAction::Clear => self.handle_clear(),
                ControlPanelAction::None => {}
            }
        });

        // Central panel - Plot Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.control_panel.cursor = self.plot_viewer.show(ui, &self.surface);
        });

        if self.surface.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
