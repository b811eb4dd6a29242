//! Sigmoid (Tanh) affinity implementation
//!
//! The sigmoid affinity is defined as:
//! k(p, q) = tanh(γ * ||p - q||² + 1)
//!
//! It rises from tanh(1) at zero distance and saturates towards 1, so only
//! points fairly close to a centroid produce a visibly different value.
//! The saturation is what gives sigmoid boundaries their S-shaped look.

use crate::core::Point;
use crate::kernel::traits::Affinity;

/// Sigmoid (Hyperbolic Tangent) affinity
#[derive(Debug, Clone, Copy)]
pub struct SigmoidAffinity {
    /// Scaling parameter for the squared distance (must be positive)
    pub gamma: f64,
}

impl SigmoidAffinity {
    /// Creates a new sigmoid affinity
    ///
    /// # Panics
    /// Panics if gamma is not positive
    ///
    /// # Examples
    /// ```
    /// use svmviz::kernel::SigmoidAffinity;
    ///
    /// let affinity = SigmoidAffinity::new(0.1);
    /// assert_eq!(affinity.gamma, 0.1);
    /// ```
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self { gamma }
    }
}

impl Affinity for SigmoidAffinity {
    fn compute(&self, p: &Point, q: &Point) -> f64 {
        (self.gamma * p.distance_squared(q) + 1.0).tanh()
    }
}
