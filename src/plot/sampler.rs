//! Fixed-step sampling of a curve.
//!
//! A failed evaluation drops its sample and splits the curve: samples on
//! either side of a failure are never joined.

use crate::expr::EvalResult;

/// Consecutive successful samples in plot coordinates.
pub type Polyline = Vec<[f64; 2]>;

/// Sample positions `x = i / steps_per_unit` for `i` in `first_step..=last_step`.
///
/// Dividing an integer step keeps every `x` exact to the nearest float, so
/// `x = 0` is sampled exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGrid {
    pub first_step: i32,
    pub last_step: i32,
    pub steps_per_unit: u32,
}

impl Default for SampleGrid {
    /// −10.0 to +10.0 at step 0.1, 201 samples.
    fn default() -> Self {
        Self::symmetric(10, 10)
    }
}

impl SampleGrid {
    /// `-extent..=extent` at `1 / steps_per_unit`. The step count saturates
    /// at `i32::MAX`.
    pub fn symmetric(extent: u32, steps_per_unit: u32) -> Self {
        let last_step = i32::try_from(extent.saturating_mul(steps_per_unit)).unwrap_or(i32::MAX);
        Self {
            first_step: -last_step,
            last_step,
            steps_per_unit,
        }
    }

    pub fn len(&self) -> usize {
        if self.last_step < self.first_step {
            0
        } else {
            (i64::from(self.last_step) - i64::from(self.first_step)) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> {
        let steps = f64::from(self.steps_per_unit.max(1));
        (self.first_step..=self.last_step).map(move |i| f64::from(i) / steps)
    }
}

/// One evaluated point, or the failure at that `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: EvalResult<f64>,
}

/// Evaluate `f` at every grid position.
pub fn sample<F>(grid: &SampleGrid, f: F) -> Vec<Sample>
where
    F: Fn(f64) -> EvalResult<f64>,
{
    grid.xs().map(|x| Sample { x, y: f(x) }).collect()
}

/// Split samples into polylines at every failure.
pub fn polylines(samples: &[Sample]) -> Vec<Polyline> {
    let mut lines = Vec::new();
    let mut current: Polyline = Vec::new();

    for s in samples {
        match s.y {
            Ok(y) => current.push([s.x, y]),
            Err(_) => {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    tracing::debug!(
        samples = samples.len(),
        polylines = lines.len(),
        "sampled curve"
    );
    lines
}
