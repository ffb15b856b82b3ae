//! Plot Viewer Widget
//! Paints the grid, axes, curves and legend of the plot surface.

use egui::{Align2, FontId, Painter, Sense, Shape, Stroke};
use graph_analyzer::plot::{PlotLayout, PlotSurface, TextItem, AXIS_COLOR, GRID_COLOR};
use graph_analyzer::PlotConfig;

const GRID_WIDTH: f32 = 1.5;
const GRID_DOT_SPACING: f32 = 4.0;
const AXIS_WIDTH: f32 = 2.0;
const CURVE_WIDTH: f32 = 2.0;
const LABEL_FONT_SIZE: f32 = 12.0;

/// Central plot area. Sampling runs on every repaint.
pub struct PlotViewer {
    config: PlotConfig,
}

impl PlotViewer {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    /// Draw the plot into the remaining space.
    /// Returns the plot coordinate under the pointer, if any.
    pub fn show(&self, ui: &mut egui::Ui, surface: &PlotSurface) -> Option<(f64, f64)> {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let layout = PlotLayout::new(response.rect, &self.config);

        Self::draw_grid(&painter, &layout);
        Self::draw_axes(&painter, &layout);

        for entry in surface.entries() {
            for path in layout.curve_paths(&entry.function) {
                // A lone sample between two failures has no segment to draw
                if path.len() >= 2 {
                    painter.add(Shape::line(path, Stroke::new(CURVE_WIDTH, entry.color)));
                }
            }
        }

        Self::draw_legend(&painter, &layout, surface);

        response
            .hover_pos()
            .map(|pos| layout.viewport.to_plot(pos))
    }

    fn draw_grid(painter: &Painter, layout: &PlotLayout<'_>) {
        for line in layout.grid_lines() {
            painter.extend(Shape::dotted_line(
                &line,
                GRID_COLOR,
                GRID_DOT_SPACING,
                GRID_WIDTH / 2.0,
            ));
        }
    }

    fn draw_axes(painter: &Painter, layout: &PlotLayout<'_>) {
        let stroke = Stroke::new(AXIS_WIDTH, AXIS_COLOR);
        for axis in layout.axes() {
            painter.line_segment(axis, stroke);
        }
        for caption in layout.axis_captions() {
            Self::draw_text(painter, &caption, AXIS_COLOR);
        }
        for tick in layout.tick_labels() {
            Self::draw_text(painter, &tick, AXIS_COLOR);
        }
    }

    fn draw_legend(painter: &Painter, layout: &PlotLayout<'_>, surface: &PlotSurface) {
        Self::draw_text(painter, &layout.legend_title(), AXIS_COLOR);
        for (idx, entry) in surface.entries().iter().enumerate() {
            painter.text(
                layout.legend_row(idx),
                Align2::LEFT_BOTTOM,
                &entry.label,
                FontId::proportional(LABEL_FONT_SIZE),
                entry.color,
            );
        }
    }

    fn draw_text(painter: &Painter, item: &TextItem, color: egui::Color32) {
        painter.text(
            item.pos,
            Align2::LEFT_BOTTOM,
            &item.text,
            FontId::proportional(LABEL_FONT_SIZE),
            color,
        );
    }
}
