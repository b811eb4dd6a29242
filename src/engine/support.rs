//! Support-vector selection heuristics
//!
//! Points are ranked by how close they sit to the boundary, using a
//! kernel-specific notion of closeness. These are presentation heuristics,
//! not the result of a margin optimization: the goal is a small, stable set
//! of teaching cases near the boundary.

use crate::core::{ClassificationParameters, LabeledPoint, Point};
use crate::engine::score::DecisionFunction;
use crate::geometry::{ClassSplit, LinearSeparation, PolynomialCurve};
use crate::kernel::KernelKind;
use crate::utils::stats::{argsort, percentile};
use log::debug;

/// Selection limits for one ranking heuristic
#[derive(Debug, Clone, Copy, PartialEq)]
struct Quota {
    max_points: usize,
    max_share: f64,
}

impl Quota {
    const fn new(max_points: usize, max_share: f64) -> Self {
        Self {
            max_points,
            max_share,
        }
    }

    /// Largest selection allowed for `n` points, never below one
    fn limit(&self, n: usize) -> usize {
        ((n as f64 * self.max_share).floor() as usize).clamp(1, self.max_points)
    }
}

const LINEAR_QUOTA: Quota = Quota::new(12, 0.15);
const LINEAR_PERCENTILE: f64 = 25.0;

const POLYNOMIAL_QUOTA: Quota = Quota::new(12, 0.15);
const POLYNOMIAL_PERCENTILE: f64 = 20.0;

const SCORE_QUOTA: Quota = Quota::new(20, 0.25);
const SCORE_RELAXED_QUOTA: Quota = Quota::new(20, 0.30);
/// Rank (1-based) of the |score| used as the selection threshold
const SCORE_THRESHOLD_RANK: usize = 10;
const SCORE_MIN_THRESHOLD: f64 = 0.3;
const SCORE_MIN_SELECTED: usize = 8;
const RBF_C_WEIGHT: f64 = 0.2;
const SIGMOID_C_WEIGHT: f64 = 0.15;

const GENERIC_MAX_RATIO: f64 = 0.3;
const GENERIC_MAX_POINTS: usize = 15;
const GENERIC_NEAREST: usize = 10;

/// Below this many picks the kernel heuristic is replaced by the generic one
const MIN_SPECIFIC: usize = 3;

/// Pick the points to present as support vectors
///
/// Returns sorted, duplicate-free indices into `points`. For a class-diverse
/// input the result is never empty and never holds more than 20 indices.
pub fn select_support_vectors(
    points: &[LabeledPoint],
    split: &ClassSplit,
    kernel: KernelKind,
    params: &ClassificationParameters,
    linear: &LinearSeparation,
) -> Vec<usize> {
    let specific = match kernel {
        KernelKind::Linear => {
            let distances: Vec<f64> = points
                .iter()
                .map(|p| linear.line.perpendicular_distance(&p.point()))
                .collect();
            closest_within_percentile(&distances, LINEAR_PERCENTILE, LINEAR_QUOTA)
        }
        KernelKind::Polynomial => {
            let curve = PolynomialCurve::for_degree(split, params);
            let distances: Vec<f64> = points
                .iter()
                .map(|p| curve.vertical_distance(&p.point()))
                .collect();
            closest_within_percentile(&distances, POLYNOMIAL_PERCENTILE, POLYNOMIAL_QUOTA)
        }
        KernelKind::RadialBasis => closest_by_score(points, split, kernel, params, RBF_C_WEIGHT),
        KernelKind::Sigmoid => closest_by_score(points, split, kernel, params, SIGMOID_C_WEIGHT),
    };

    let mut selected = if specific.len() < MIN_SPECIFIC {
        debug!(
            "{kernel} heuristic picked {} point(s); using the centroid-ratio fallback",
            specific.len()
        );
        generic_selection(points, split)
    } else {
        specific
    };

    selected.sort_unstable();
    selected.dedup();
    selected
}

/// Closest points whose distance is at or below the given percentile
fn closest_within_percentile(distances: &[f64], pct: f64, quota: Quota) -> Vec<usize> {
    let Some(threshold) = percentile(distances, pct) else {
        return Vec::new();
    };

    argsort(distances)
        .into_iter()
        .filter(|&i| distances[i] <= threshold)
        .take(quota.limit(distances.len()))
        .collect()
}

/// Points whose decision score is nearest zero
fn closest_by_score(
    points: &[LabeledPoint],
    split: &ClassSplit,
    kernel: KernelKind,
    params: &ClassificationParameters,
    c_weight: f64,
) -> Vec<usize> {
    if points.is_empty() {
        return Vec::new();
    }

    let decision = DecisionFunction::new(kernel, params, split)
        .with_scale(1.0 + (params.c - 1.0) * c_weight);
    let magnitudes: Vec<f64> = points
        .iter()
        .map(|p| decision.score(&p.point()).abs())
        .collect();
    let order = argsort(&magnitudes);

    let rank = SCORE_THRESHOLD_RANK.min(order.len()) - 1;
    let threshold = magnitudes[order[rank]].max(SCORE_MIN_THRESHOLD);

    let within: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&i| magnitudes[i] <= threshold)
        .collect();

    if within.len() < SCORE_MIN_SELECTED {
        debug!(
            "Only {} point(s) under |score| {threshold:.3}; relaxing to the closest by score",
            within.len()
        );
        return order
            .into_iter()
            .take(SCORE_RELAXED_QUOTA.limit(points.len()))
            .collect();
    }

    within
        .into_iter()
        .take(SCORE_QUOTA.limit(points.len()))
        .collect()
}

/// Normalized centroid-distance difference: 0 on the bisector, 1 at a centroid
fn centroid_ratio(p: &Point, split: &ClassSplit) -> f64 {
    let to_positive = p.distance(&split.positive_centroid);
    let to_negative = p.distance(&split.negative_centroid);
    let total = to_positive + to_negative;
    if total > 0.0 {
        (to_positive - to_negative).abs() / total
    } else {
        0.0
    }
}

/// Kernel-independent selection by centroid ratio
fn generic_selection(points: &[LabeledPoint], split: &ClassSplit) -> Vec<usize> {
    let ratios: Vec<f64> = points
        .iter()
        .map(|p| centroid_ratio(&p.point(), split))
        .collect();
    let order = argsort(&ratios);

    let close: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&i| ratios[i] < GENERIC_MAX_RATIO)
        .take(GENERIC_MAX_POINTS)
        .collect();

    if close.is_empty() {
        order.into_iter().take(GENERIC_NEAREST).collect()
    } else {
        close
    }
}
