//! Sigmoid boundaries: a smoothed tanh step through the centroid midpoint

use crate::core::{Boundary, ClassificationParameters, Point};
use crate::geometry::{linspace, smooth_curve, ClassSplit};

pub const SIGMOID_SAMPLES: usize = 400;
pub const SIGMOID_AMPLITUDE: f64 = 0.35;
pub const MIN_STEEPNESS: f64 = 1.5;
const STEEPNESS_PER_GAMMA: f64 = 0.8;
const C_SHIFT_FRACTION: f64 = 0.02;
/// Samples averaged on each side of every point
pub const SMOOTHING_RADIUS: usize = 25;

/// Horizontal scale of the tanh step: `max(1.5, 0.8 * gamma)`
pub fn steepness(gamma: f64) -> f64 {
    MIN_STEEPNESS.max(gamma * STEEPNESS_PER_GAMMA)
}

pub fn sigmoid_boundary(split: &ClassSplit, params: &ClassificationParameters) -> Boundary {
    let mid = split.midpoint();
    let y_range = split.bounds.y_range();
    let amplitude = SIGMOID_AMPLITUDE * y_range;
    let steepness = steepness(params.gamma);
    let shift = (params.c - 1.0) * y_range * C_SHIFT_FRACTION;

    let padded = split.padded_bounds();
    let raw: Vec<Point> = linspace(padded.min_x, padded.max_x, SIGMOID_SAMPLES)
        .into_iter()
        .map(|x| {
            let y = mid.y - amplitude * ((x - mid.x) / steepness).tanh() + shift;
            Point::new(x, y)
        })
        .collect();

    Boundary {
        curve: smooth_curve(&raw, SMOOTHING_RADIUS),
        margins: None,
        regions: None,
    }
}
