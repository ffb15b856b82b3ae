//! GUI module - User interface components

mod app;
mod control_panel;
mod plot_viewer;

pub use app::GraphAnalyzerApp;
pub use control_panel::{ControlPanel, ControlPanelAction, StatusKind};
pub use plot_viewer::PlotViewer;
