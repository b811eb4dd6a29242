//! Centroid-based decision score

use crate::core::{ClassificationParameters, GridSample, Label, Point};
use crate::geometry::{linspace, Bounds, ClassSplit};
use crate::kernel::{Affinity, KernelKind};

/// Grid resolution (per axis) for background-fill samples
pub const GRID_RESOLUTION: usize = 40;

/// Score multiplier derived from C: `1 + tanh(C / 2) / 2`
pub fn strictness_scale(c: f64) -> f64 {
    1.0 + (c * 0.5).tanh() * 0.5
}

/// Signed score comparing a point's affinity to each class centroid
///
/// `score(p) = (k(p, negCentroid) - k(p, posCentroid)) * scale`, using the
/// distance-like view of the affinity. A score of zero or more predicts the
/// positive label.
pub struct DecisionFunction {
    affinity: Box<dyn Affinity>,
    positive: Point,
    negative: Point,
    scale: f64,
}

impl DecisionFunction {
    /// Score against the centroids of `split`
    ///
    /// # Panics
    /// Panics on parameters that [`ClassificationParameters::validate`]
    /// rejects, as [`KernelKind::affinity`] does.
    pub fn new(kernel: KernelKind, params: &ClassificationParameters, split: &ClassSplit) -> Self {
        Self {
            affinity: kernel.affinity(params),
            positive: split.positive_centroid,
            negative: split.negative_centroid,
            scale: strictness_scale(params.c),
        }
    }

    /// Replace the C-derived multiplier
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn score(&self, p: &Point) -> f64 {
        let to_negative = self.affinity.dissimilarity(p, &self.negative);
        let to_positive = self.affinity.dissimilarity(p, &self.positive);
        (to_negative - to_positive) * self.scale
    }

    pub fn predict(&self, p: &Point) -> Label {
        if self.score(p) >= 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// Evaluate the score on a `resolution` x `resolution` grid over `bounds`
    ///
    /// Rows run along y, columns along x; samples are emitted row by row.
    pub fn grid(&self, bounds: &Bounds, resolution: usize) -> Vec<GridSample> {
        let xs = linspace(bounds.min_x, bounds.max_x, resolution);
        let ys = linspace(bounds.min_y, bounds.max_y, resolution);

        ys.iter()
            .flat_map(|&y| {
                xs.iter().map(move |&x| {
                    let value = self.score(&Point::new(x, y));
                    GridSample { x, y, value }
                })
            })
            .collect()
    }
}
