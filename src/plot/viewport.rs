//! Mapping between plot units and screen pixels.

use egui::{pos2, Pos2, Rect};

/// Screen coordinates are clamped to this range so that a finite but huge
/// sample still maps to a finite, off-screen `f32`.
const SCREEN_LIMIT: f64 = 1.0e7;

/// Fixed-scale Cartesian mapping centred on a widget. Y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Pos2,
    pub pixels_per_unit: f32,
}

impl Viewport {
    /// Centre on `rect`, snapped to whole pixels so grid lines stay crisp.
    pub fn new(rect: Rect, pixels_per_unit: f32) -> Self {
        let center = pos2(
            rect.min.x + (rect.width() / 2.0).floor(),
            rect.min.y + (rect.height() / 2.0).floor(),
        );
        Self {
            center,
            pixels_per_unit,
        }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        let scale = f64::from(self.pixels_per_unit);
        let clamp = |v: f64| v.clamp(-SCREEN_LIMIT, SCREEN_LIMIT) as f32;
        pos2(
            clamp(f64::from(self.center.x) + x * scale),
            clamp(f64::from(self.center.y) - y * scale),
        )
    }

    pub fn to_plot(&self, pos: Pos2) -> (f64, f64) {
        let scale = f64::from(self.pixels_per_unit);
        (
            f64::from(pos.x - self.center.x) / scale,
            f64::from(self.center.y - pos.y) / scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn viewport() -> Viewport {
        Viewport::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(801.0, 600.0)), 20.0)
    }

    #[test]
    fn test_center_is_floored() {
        assert_eq!(viewport().center, pos2(400.0, 300.0));
    }

    #[test]
    fn test_y_axis_points_up() {
        let vp = viewport();
        assert_eq!(vp.to_screen(0.0, 0.0), pos2(400.0, 300.0));
        assert_eq!(vp.to_screen(1.0, 1.0), pos2(420.0, 280.0));
        assert_eq!(vp.to_screen(-10.0, -2.0), pos2(200.0, 340.0));
    }

    #[test]
    fn test_to_plot_inverts_to_screen() {
        let vp = viewport();
        assert_eq!(vp.to_plot(pos2(460.0, 200.0)), (3.0, 5.0));
    }

    #[test]
    fn test_huge_values_are_clamped_off_screen() {
        let vp = viewport();
        let p = vp.to_screen(10.0, 1.0e300);
        assert_eq!(p.x, 600.0);
        assert!(p.y.is_finite() && p.y < -1.0e6);
        assert!(vp.to_screen(-1.0e300, 0.0).x.is_finite());
    }

    #[test]
    fn test_offset_rect() {
        let vp = Viewport::new(Rect::from_min_size(pos2(10.0, 50.0), vec2(200.0, 100.0)), 20.0);
        assert_eq!(vp.to_screen(0.0, 0.0), pos2(110.0, 100.0));
    }
}
