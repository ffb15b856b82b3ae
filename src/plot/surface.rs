//! Plot Surface
//! Owns the curve entries and the color cycle. Painting lives in the GUI.

use crate::expr::{Expression, ParseResult};
use crate::plot::palette::palette_color;
use egui::Color32;

/// A registered function with its display color and label.
#[derive(Debug, Clone)]
pub struct CurveEntry {
    pub function: Expression,
    pub color: Color32,
    pub label: String,
}

impl CurveEntry {
    /// Legend label for an expression, `y = <expr>`.
    pub fn label_for(function: &Expression) -> String {
        format!("y = {}", function.source())
    }
}

/// Ordered curve list. Insertion order is draw order and legend order.
#[derive(Debug, Default)]
pub struct PlotSurface {
    entries: Vec<CurveEntry>,
    color_index: usize,
    redraw_requested: bool,
}

impl PlotSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, function: Expression, color: Color32, label: impl Into<String>) {
        let label = label.into();
        tracing::info!(label = %label, count = self.entries.len() + 1, "curve added");
        self.entries.push(CurveEntry {
            function,
            color,
            label,
        });
        self.redraw_requested = true;
    }

    /// Remove every curve and restart the color cycle.
    pub fn clear(&mut self) {
        tracing::info!(removed = self.entries.len(), "curves cleared");
        self.entries.clear();
        self.color_index = 0;
        self.redraw_requested = true;
    }

    pub fn next_color(&mut self) -> Color32 {
        let color = palette_color(self.color_index);
        self.color_index += 1;
        color
    }

    /// Compile `text` and add it with the next palette color.
    ///
    /// The color cycle only advances when compilation succeeds.
    pub fn add_expression(&mut self, text: &str) -> ParseResult<&CurveEntry> {
        let function = Expression::parse(text)?;
        let label = CurveEntry::label_for(&function);
        let color = self.next_color();
        self.add(function, color, label);
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[CurveEntry] {
        &self.entries
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once after each add or clear.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
