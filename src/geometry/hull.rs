//! Convex hulls and smooth cluster outlines
//!
//! Outlines are built in three steps: monotone-chain convex hull, a slight
//! outward inflation from the hull's centroid, then Chaikin corner cutting.

use crate::core::Point;
use crate::utils::stats::mean;

/// Outward inflation applied to hull vertices, as a fraction of their
/// distance from the hull centroid
pub const HULL_INFLATION: f64 = 0.02;

/// Chaikin subdivision passes used for cluster outlines
pub const CHAIKIN_PASSES: usize = 2;

fn cross(o: &Point, a: &Point, b: &Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Mean of the vertices, `None` for an empty slice
pub fn centroid(points: &[Point]) -> Option<Point> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    Some(Point::new(mean(&xs)?, mean(&ys)?))
}

/// Convex hull by Andrew's monotone chain, counter-clockwise, no repeated end
///
/// Collinear points are dropped, so a degenerate input yields fewer than
/// three vertices.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(sorted.len());
    for p in &sorted {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }

    // Last point of each chain is the first point of the other
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Push every vertex away from the polygon's vertex centroid
pub fn inflate(polygon: &[Point], fraction: f64) -> Vec<Point> {
    let Some(centroid) = centroid(polygon) else {
        return Vec::new();
    };

    polygon
        .iter()
        .map(|p| centroid.lerp(p, 1.0 + fraction))
        .collect()
}

/// Chaikin corner cutting on a closed polygon
///
/// Each pass replaces every edge P→Q with the points at 1/4 and 3/4 along it,
/// doubling the vertex count and rounding the corners.
pub fn chaikin_closed(polygon: &[Point], passes: usize) -> Vec<Point> {
    let mut current = polygon.to_vec();
    if current.len() < 3 {
        return current;
    }

    for _ in 0..passes {
        let n = current.len();
        let mut next = Vec::with_capacity(n * 2);
        for i in 0..n {
            let p = current[i];
            let q = current[(i + 1) % n];
            next.push(p.lerp(&q, 0.25));
            next.push(p.lerp(&q, 0.75));
        }
        current = next;
    }

    current
}

/// Smooth closed outline around a cluster of points
///
/// Returns an empty outline when the cluster has fewer than three points or
/// its hull collapses to a segment. Otherwise the first vertex is repeated at
/// the end so the contour renders closed.
pub fn cluster_outline(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return Vec::new();
    }

    let hull = convex_hull(points);
    if hull.len() < 3 {
        return Vec::new();
    }

    let mut outline = chaikin_closed(&inflate(&hull, HULL_INFLATION), CHAIKIN_PASSES);
    if let Some(&first) = outline.first() {
        outline.push(first);
    }
    outline
}
