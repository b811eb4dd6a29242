//! Affinity trait definition

use crate::core::Point;

/// Pairwise affinity between two points in the feature space
///
/// The decision score compares a point's affinity to the negative centroid
/// against its affinity to the positive centroid. Implementations whose raw
/// value shrinks with distance (similarities) override
/// [`Affinity::dissimilarity`] so the score keeps one orientation across
/// every kernel.
pub trait Affinity: Send + Sync {
    /// Compute the affinity k(p, q)
    fn compute(&self, p: &Point, q: &Point) -> f64;

    /// Distance-like view of the affinity: grows as `p` moves away from `q`
    fn dissimilarity(&self, p: &Point, q: &Point) -> f64 {
        self.compute(p, q)
    }
}
