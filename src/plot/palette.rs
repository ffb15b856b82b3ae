//! Curve colors.

use egui::Color32;

/// Colors cycled for successive curves.
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0, 0, 255),     // Blue
    Color32::from_rgb(255, 165, 0),   // Orange
    Color32::from_rgb(0, 128, 0),     // Green
    Color32::from_rgb(255, 0, 0),     // Red
    Color32::from_rgb(128, 0, 128),   // Purple
    Color32::from_rgb(165, 42, 42),   // Brown
    Color32::from_rgb(255, 0, 255),   // Magenta
    Color32::from_rgb(0, 139, 139),   // Dark Cyan
];

pub const GRID_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
pub const AXIS_COLOR: Color32 = Color32::WHITE;

/// Palette entry for the n-th curve since the last clear.
pub fn palette_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}
