//! Linear affinity implementation

use crate::core::Point;
use crate::kernel::Affinity;

/// Linear affinity: plain Euclidean distance, k(p, q) = ||p - q||
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearAffinity;

impl LinearAffinity {
    /// Create a new linear affinity
    pub fn new() -> Self {
        Self
    }
}

impl Affinity for LinearAffinity {
    fn compute(&self, p: &Point, q: &Point) -> f64 {
        p.distance(q)
    }
}
