//! Utility functions shared by the engine and the generator

use crate::core::Point;

/// Small statistics helpers over plain float slices
pub mod stats {
    /// Arithmetic mean, `None` for an empty slice
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }

    /// Lower nearest-rank percentile (`pct` in 0..=100)
    ///
    /// Always returns one of the input values, so at least one element is
    /// `<=` the result. `None` for an empty slice.
    pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let fraction = (pct / 100.0).clamp(0.0, 1.0);
        let rank = ((sorted.len() - 1) as f64 * fraction).floor() as usize;
        Some(sorted[rank])
    }

    /// Indices of `values` ordered by ascending value (stable on ties)
    pub fn argsort(values: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
        order
    }
}

/// Deterministic pseudo-random offset in [0, 1) seeded by a point's coordinates
///
/// Classic shader-style hash: fract(sin(x * 12.9898 + y * 78.233) * 43758.5453).
fn coordinate_hash(x: f64, y: f64) -> f64 {
    let value = (x * 12.9898 + y * 78.233).sin() * 43758.5453;
    value - value.floor()
}

/// Spread a point for display so overlapping samples stay visible
///
/// Cosmetic only: the result is meant for the rendering layer and must never
/// be fed back into classification or boundary generation. Each axis moves by
/// at most `amount / 2`.
pub fn display_jitter(point: Point, amount: f64) -> Point {
    let dx = (coordinate_hash(point.x, point.y) - 0.5) * amount;
    let dy = (coordinate_hash(point.y, point.x) - 0.5) * amount;
    Point::new(point.x + dx, point.y + dy)
}
