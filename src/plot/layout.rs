//! Repaint geometry.
//!
//! Everything drawn on the plot is computed here from the widget rect, the
//! plot settings and the curve list, so a repaint depends on nothing else.

use crate::config::{PlotConfig, MAX_GRID_EXTENT};
use crate::expr::Expression;
use crate::plot::sampler::{polylines, sample};
use crate::plot::viewport::Viewport;
use egui::{pos2, vec2, Pos2, Rect};

/// Legend heading text.
pub const LEGEND_TITLE: &str = "Legend:";

const LEGEND_ORIGIN: [f32; 2] = [20.0, 30.0];
const LEGEND_FIRST_ROW: f32 = 50.0;
const LEGEND_ROW_HEIGHT: f32 = 20.0;

/// A text item anchored at its bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub pos: Pos2,
    pub text: String,
}

pub struct PlotLayout<'a> {
    pub rect: Rect,
    pub viewport: Viewport,
    config: &'a PlotConfig,
}

impl<'a> PlotLayout<'a> {
    pub fn new(rect: Rect, config: &'a PlotConfig) -> Self {
        Self {
            rect,
            viewport: Viewport::new(rect, config.pixels_per_unit),
            config,
        }
    }

    fn grid_range(&self) -> std::ops::RangeInclusive<i32> {
        let extent = self.config.grid_extent.min(MAX_GRID_EXTENT) as i32;
        -extent..=extent
    }

    fn tick_values(&self) -> impl Iterator<Item = i32> {
        self.grid_range().step_by(self.config.tick_step.max(1) as usize)
    }

    /// Vertical lines first, then horizontal, each spanning the whole rect.
    pub fn grid_lines(&self) -> Vec<[Pos2; 2]> {
        let vertical = self.grid_range().map(|k| {
            let px = self.viewport.to_screen(f64::from(k), 0.0).x;
            [pos2(px, self.rect.top()), pos2(px, self.rect.bottom())]
        });
        let horizontal = self.grid_range().map(|k| {
            let py = self.viewport.to_screen(0.0, f64::from(k)).y;
            [pos2(self.rect.left(), py), pos2(self.rect.right(), py)]
        });
        vertical.chain(horizontal).collect()
    }

    /// X axis then Y axis, through the centre.
    pub fn axes(&self) -> [[Pos2; 2]; 2] {
        let c = self.viewport.center;
        [
            [pos2(self.rect.left(), c.y), pos2(self.rect.right(), c.y)],
            [pos2(c.x, self.rect.top()), pos2(c.x, self.rect.bottom())],
        ]
    }

    pub fn axis_captions(&self) -> [TextItem; 2] {
        let c = self.viewport.center;
        [
            TextItem {
                pos: pos2(self.rect.right() - 20.0, c.y - 5.0),
                text: "X".to_string(),
            },
            TextItem {
                pos: pos2(c.x + 5.0, self.rect.top() + 20.0),
                text: "Y".to_string(),
            },
        ]
    }

    /// Labels along both axes at every tick value, X axis first.
    pub fn tick_labels(&self) -> Vec<TextItem> {
        let c = self.viewport.center;
        let x_ticks = self.tick_values().map(|v| {
            let px = self.viewport.to_screen(f64::from(v), 0.0).x;
            TextItem {
                pos: pos2(px - 10.0, c.y + 20.0),
                text: v.to_string(),
            }
        });
        let y_ticks = self.tick_values().map(|v| {
            let py = self.viewport.to_screen(0.0, f64::from(v)).y;
            TextItem {
                pos: pos2(c.x + 10.0, py + 5.0),
                text: v.to_string(),
            }
        });
        x_ticks.chain(y_ticks).collect()
    }

    pub fn legend_title(&self) -> TextItem {
        TextItem {
            pos: self.rect.min + vec2(LEGEND_ORIGIN[0], LEGEND_ORIGIN[1]),
            text: LEGEND_TITLE.to_string(),
        }
    }

    /// Position of the legend row for the `index`-th curve.
    pub fn legend_row(&self, index: usize) -> Pos2 {
        self.rect.min + vec2(LEGEND_ORIGIN[0], LEGEND_FIRST_ROW + LEGEND_ROW_HEIGHT * index as f32)
    }

    /// Sample `function` and map each polyline to screen space.
    pub fn curve_paths(&self, function: &Expression) -> Vec<Vec<Pos2>> {
        let samples = sample(&self.config.sample_grid(), |x| function.eval(x));
        polylines(&samples)
            .into_iter()
            .map(|line| {
                line.into_iter()
                    .map(|[x, y]| self.viewport.to_screen(x, y))
                    .collect()
            })
            .collect()
    }
}
