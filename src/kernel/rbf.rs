//! RBF (Radial Basis Function) affinity implementation
//!
//! The RBF affinity is defined as: k(p, q) = exp(-γ * ||p - q||²)
//! where γ (gamma) controls how quickly influence decays with distance.

use crate::core::Point;
use crate::kernel::Affinity;

/// RBF (Gaussian) affinity: k(p, q) = exp(-γ * ||p - q||²)
///
/// The gamma parameter controls the "reach" of each centroid:
/// - High gamma: only close points feel the centroid (tight regions)
/// - Low gamma: distant points still feel it (broad regions)
///
/// Unlike the other affinities this is a similarity, so its
/// [`Affinity::dissimilarity`] is the negated value.
#[derive(Debug, Clone, Copy)]
pub struct RbfAffinity {
    gamma: f64,
}

impl RbfAffinity {
    /// Create a new RBF affinity with specified gamma parameter
    ///
    /// # Panics
    /// Panics if gamma is not positive
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self { gamma }
    }

    /// Get the gamma parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Affinity for RbfAffinity {
    fn compute(&self, p: &Point, q: &Point) -> f64 {
        (-self.gamma * p.distance_squared(q)).exp()
    }

    fn dissimilarity(&self, p: &Point, q: &Point) -> f64 {
        -self.compute(p, q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Gamma must be positive")]
    fn test_rbf_affinity_invalid_gamma() {
        RbfAffinity::new(-0.5);
    }

    #[test]
    fn test_rbf_affinity_identical_points() {
        let affinity = RbfAffinity::new(1.0);
        let p = Point::new(1.0, 2.0);
        assert!((affinity.compute(&p, &p) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rbf_affinity_different_gammas() {
        let p = Point::new(1.0, 0.0);
        let q = Point::new(3.0, 0.0);

        // ||p - q||² = 4
        let low = RbfAffinity::new(0.1).compute(&p, &q);
        let high = RbfAffinity::new(1.0).compute(&p, &q);

        // Larger gamma means tighter influence
        assert!(low > high);
        assert!((low - (-0.4_f64).exp()).abs() < 1e-10);
        assert!((high - (-4.0_f64).exp()).abs() < 1e-10);
    }

    #[test]
    fn test_rbf_dissimilarity_grows_with_distance() {
        let affinity = RbfAffinity::new(0.5);
        let origin = Point::new(0.0, 0.0);
        let near = affinity.dissimilarity(&origin, &Point::new(1.0, 0.0));
        let far = affinity.dissimilarity(&origin, &Point::new(2.0, 0.0));
        assert!(far > near);
    }

    #[test]
    fn test_rbf_affinity_numerical_stability() {
        let affinity = RbfAffinity::new(0.01);
        let p = Point::new(1e6, 0.0);
        let q = Point::new(-1e6, 0.0);

        let value = affinity.compute(&p, &q);
        assert!(value.is_finite());
        assert!((0.0..=1.0).contains(&value));
    }
}
