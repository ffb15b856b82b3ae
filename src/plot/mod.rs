//! Plot module - curve list, sampling and repaint geometry

mod layout;
mod palette;
mod sampler;
mod surface;
mod viewport;

pub use layout::{PlotLayout, TextItem, LEGEND_TITLE};
pub use palette::{palette_color, AXIS_COLOR, GRID_COLOR, PALETTE};
pub use sampler::{polylines, sample, Polyline, Sample, SampleGrid};
pub use surface::{CurveEntry, PlotSurface};
pub use viewport::Viewport;
