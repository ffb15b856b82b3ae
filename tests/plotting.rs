//! Integration tests: expression compiler + plot surface + sampling, driven
//! the way the window shell drives them.

use approx::assert_relative_eq;
use egui::{pos2, vec2, Rect};
use graph_analyzer::expr::{EvalError, Expression, ParseErrorKind, MAX_DEPTH};
use graph_analyzer::plot::{polylines, sample, PlotLayout, PlotSurface, SampleGrid, PALETTE};
use graph_analyzer::PlotConfig;

fn sample_expr(input: &str) -> Vec<graph_analyzer::plot::Polyline> {
    let function = Expression::parse(input).unwrap();
    polylines(&sample(&SampleGrid::default(), |x| function.eval(x)))
}

fn point_count(lines: &[graph_analyzer::plot::Polyline]) -> usize {
    lines.iter().map(|l| l.len()).sum()
}

#[test]
fn test_add_creates_one_labelled_entry() {
    let mut surface = PlotSurface::new();
    for (n, input) in ["sin(x)*2", "x^2 - 3", "math.sqrt(x)", "1/x"].iter().enumerate() {
        surface.add_expression(input).unwrap();
        assert_eq!(surface.len(), n + 1);
        assert_eq!(surface.entries()[n].label, format!("y = {}", input));
    }
}

#[test]
fn test_color_assignment_is_deterministic() {
    let mut surface = PlotSurface::new();
    for n in 0..17 {
        surface.add_expression("x").unwrap();
        assert_eq!(surface.entries()[n].color, PALETTE[n % 8]);
    }

    surface.clear();
    surface.add_expression("cos(x)").unwrap();
    assert_eq!(surface.entries()[0].color, PALETTE[0]);
}

#[test]
fn test_identity_is_a_straight_diagonal() {
    let lines = sample_expr("x");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 201);
    for [x, y] in &lines[0] {
        assert_eq!(x, y);
    }
    assert_eq!(lines[0][100], [0.0, 0.0]);

    // Collinear in screen space too
    let config = PlotConfig::default();
    let layout = PlotLayout::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0)), &config);
    let path = &layout.curve_paths(&Expression::parse("x").unwrap())[0];
    for p in path {
        assert_relative_eq!(p.x - 400.0, 300.0 - p.y, epsilon = 1e-3);
    }
}

#[test]
fn test_reciprocal_breaks_at_zero() {
    let lines = sample_expr("1/x");
    assert_eq!(point_count(&lines), 200);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].last().unwrap()[0], -0.1);
    assert_eq!(lines[1].first().unwrap()[0], 0.1);

    let function = Expression::parse("1/x").unwrap();
    assert_eq!(function.eval(0.0), Err(EvalError::DivisionByZero));
}

#[test]
fn test_half_domain_function() {
    // sqrt is defined from 0 upward: 101 samples
    let lines = sample_expr("sqrt(x)");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 101);
    assert_eq!(lines[0][0], [0.0, 0.0]);
}

#[test]
fn test_undefined_everywhere_draws_nothing() {
    assert!(sample_expr("sqrt(-1 - x*x)").is_empty());
    assert!(sample_expr("log(-abs(x) - 1)").is_empty());
}

#[test]
fn test_invalid_expression_rejected_at_add_time() {
    let mut surface = PlotSurface::new();
    surface.add_expression("x").unwrap();

    for bad in ["(x + 1", "x + 1)", "", "import os", "__import__(x)", "x.real"] {
        assert!(surface.add_expression(bad).is_err(), "accepted {:?}", bad);
    }
    assert_eq!(surface.len(), 1);
    assert_eq!(surface.color_index(), 1);

    let err = surface.add_expression("sin(x").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedParen);
    assert!(err.to_string().contains("unclosed"));
}

#[test]
fn test_deeply_nested_input_is_a_compile_error() {
    let mut surface = PlotSurface::new();
    let n = 10_000;
    let nested = format!("{}x{}", "(".repeat(n), ")".repeat(n));

    let err = surface.add_expression(&nested).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TooDeep(MAX_DEPTH));
    assert!(surface.add_expression(&format!("{}x", "-".repeat(n))).is_err());
    assert!(surface.is_empty());
    assert_eq!(surface.color_index(), 0);
}

#[test]
fn test_huge_values_stay_finite_on_screen() {
    let config = PlotConfig::default();
    let layout = PlotLayout::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0)), &config);
    let paths = layout.curve_paths(&Expression::parse("x^300").unwrap());
    assert!(!paths.is_empty());
    for p in paths.iter().flatten() {
        assert!(p.x.is_finite() && p.y.is_finite(), "{:?}", p);
    }
}

#[test]
fn test_empty_surface_still_has_grid_and_legend_title() {
    let config = PlotConfig::default();
    let surface = PlotSurface::new();
    let layout = PlotLayout::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0)), &config);

    assert!(surface.entries().is_empty());
    assert_eq!(layout.grid_lines().len(), 42);
    assert_eq!(layout.tick_labels().len(), 22);
    assert_eq!(layout.legend_title().text, "Legend:");
}
