//! Graph Analyzer - plot functions of one variable on a Cartesian grid.
//!
//! The library holds everything that does not need a window: the restricted
//! expression compiler, the curve list with its color cycle, sampling and the
//! geometry of each repaint. The binary wires it to an eframe window.
//!
//! ```
//! use graph_analyzer::plot::{polylines, sample, PlotSurface, SampleGrid};
//!
//! let mut surface = PlotSurface::new();
//! let entry = surface.add_expression("1/x").unwrap();
//! assert_eq!(entry.label, "y = 1/x");
//!
//! let function = &surface.entries()[0].function;
//! let lines = polylines(&sample(&SampleGrid::default(), |x| function.eval(x)));
//! assert_eq!(lines.len(), 2);
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod expr;
pub mod plot;

pub use config::{AppConfig, ConfigError, PlotConfig, WindowConfig};
pub use expr::{EvalError, Expression, ParseError};
