//! Polynomial affinity implementation
//!
//! The polynomial affinity is defined as:
//! k(p, q) = (||p - q||² + 1)^d
//!
//! Where d is the polynomial degree (1 to 3). The value grows with distance,
//! faster for higher degrees.

use crate::core::Point;
use crate::kernel::traits::Affinity;

/// Polynomial affinity with configurable degree
#[derive(Debug, Clone, Copy)]
pub struct PolynomialAffinity {
    /// Degree of the polynomial
    pub degree: u32,
}

impl PolynomialAffinity {
    /// Creates a new polynomial affinity
    ///
    /// # Panics
    /// Panics if degree is zero
    ///
    /// # Examples
    /// ```
    /// use svmviz::kernel::PolynomialAffinity;
    ///
    /// let quadratic = PolynomialAffinity::new(2);
    /// assert_eq!(quadratic.degree, 2);
    /// ```
    pub fn new(degree: u32) -> Self {
        assert!(degree > 0, "Polynomial degree must be positive");
        Self { degree }
    }
}

impl Affinity for PolynomialAffinity {
    fn compute(&self, p: &Point, q: &Point) -> f64 {
        (p.distance_squared(q) + 1.0).powi(self.degree as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial_affinity_computation() {
        let affinity = PolynomialAffinity::new(2);
        let p = Point::new(1.0, 2.0);
        let q = Point::new(2.0, 1.0);

        // ||p - q||² = 2, (2 + 1)² = 9
        assert_relative_eq!(affinity.compute(&p, &q), 9.0, epsilon = 1e-10);
    }

    #[test]
    fn test_polynomial_affinity_degrees() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 0.0);

        assert_relative_eq!(PolynomialAffinity::new(1).compute(&p, &q), 2.0);
        assert_relative_eq!(PolynomialAffinity::new(2).compute(&p, &q), 4.0);
        assert_relative_eq!(PolynomialAffinity::new(3).compute(&p, &q), 8.0);
    }

    #[test]
    fn test_polynomial_affinity_identical_points() {
        let affinity = PolynomialAffinity::new(3);
        let p = Point::new(4.0, -1.0);
        assert_relative_eq!(affinity.compute(&p, &p), 1.0);
    }

    #[test]
    #[should_panic(expected = "Polynomial degree must be positive")]
    fn test_polynomial_affinity_zero_degree() {
        PolynomialAffinity::new(0);
    }
}
