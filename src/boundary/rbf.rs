//! Radial-basis boundaries
//!
//! The crossing curve is extracted from the sign changes of the RBF decision
//! score on a grid. Independently, each class gets a smooth closed outline
//! built from its own points.

use crate::core::{Boundary, ClassRegions, ClassificationParameters, Point};
use crate::engine::DecisionFunction;
use crate::geometry::{cluster_outline, linspace, smooth_curve, Bounds, ClassSplit};
use crate::kernel::KernelKind;
use log::debug;

/// Grid resolution (per axis) for the crossing scan
pub const CROSSING_GRID: usize = 50;
/// Window of 3: one sample on each side
const CROSSING_SMOOTHING_RADIUS: usize = 1;

pub fn rbf_boundary(split: &ClassSplit, params: &ClassificationParameters) -> Boundary {
    let decision = DecisionFunction::new(KernelKind::RadialBasis, params, split);
    let padded = split.padded_bounds();
    let mid = split.midpoint();

    let columns = column_crossings(&decision, &padded, CROSSING_GRID, mid.y);
    let curve = if columns.len() >= 2 {
        smooth_curve(&columns, CROSSING_SMOOTHING_RADIUS)
    } else {
        debug!(
            "Only {} column crossing(s); scanning rows instead",
            columns.len()
        );
        let rows = row_crossings(&decision, &padded, CROSSING_GRID, mid.x);
        // Smooth along x for a curve parameterized by y
        transposed(&smooth_curve(&transposed(&rows), CROSSING_SMOOTHING_RADIUS))
    };

    Boundary {
        curve,
        margins: None,
        regions: Some(ClassRegions {
            positive: cluster_outline(&split.positives),
            negative: cluster_outline(&split.negatives),
        }),
    }
}

fn transposed(points: &[Point]) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.y, p.x)).collect()
}

/// Position of the zero between two samples of opposite sign, if any
fn crossing(a: f64, score_a: f64, b: f64, score_b: f64) -> Option<f64> {
    if (score_a >= 0.0) == (score_b >= 0.0) {
        return None;
    }
    Some(a + (b - a) * score_a / (score_a - score_b))
}

/// Of several crossings keep the one closest to `target`
fn nearest(crossings: impl Iterator<Item = f64>, target: f64) -> Option<f64> {
    crossings.min_by(|a, b| (a - target).abs().total_cmp(&(b - target).abs()))
}

/// One crossing per x column, scanning each column top to bottom
///
/// Output is ordered by increasing x; columns without a sign change are
/// skipped.
fn column_crossings(
    decision: &DecisionFunction,
    bounds: &Bounds,
    resolution: usize,
    target_y: f64,
) -> Vec<Point> {
    let ys = linspace(bounds.max_y, bounds.min_y, resolution);

    linspace(bounds.min_x, bounds.max_x, resolution)
        .into_iter()
        .filter_map(|x| {
            let scores: Vec<f64> = ys.iter().map(|&y| decision.score(&Point::new(x, y))).collect();
            let found = (1..ys.len())
                .filter_map(|i| crossing(ys[i - 1], scores[i - 1], ys[i], scores[i]));
            nearest(found, target_y).map(|y| Point::new(x, y))
        })
        .collect()
}

/// One crossing per y row, scanning each row left to right
///
/// Used when the boundary runs mostly vertically and columns see no sign
/// change. Output is ordered by increasing y.
fn row_crossings(
    decision: &DecisionFunction,
    bounds: &Bounds,
    resolution: usize,
    target_x: f64,
) -> Vec<Point> {
    let xs = linspace(bounds.min_x, bounds.max_x, resolution);

    linspace(bounds.min_y, bounds.max_y, resolution)
        .into_iter()
        .filter_map(|y| {
            let scores: Vec<f64> = xs.iter().map(|&x| decision.score(&Point::new(x, y))).collect();
            let found = (1..xs.len())
                .filter_map(|i| crossing(xs[i - 1], scores[i - 1], xs[i], scores[i]));
            nearest(found, target_x).map(|x| Point::new(x, y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LabeledPoint;

    fn stacked() -> Vec<LabeledPoint> {
        // Negative cluster below, positive cluster above
        vec![
            LabeledPoint::negative(0.0, 0.0),
            LabeledPoint::negative(2.0, 0.5),
            LabeledPoint::negative(1.0, 1.5),
            LabeledPoint::positive(0.0, 6.0),
            LabeledPoint::positive(2.0, 6.5),
            LabeledPoint::positive(1.0, 7.5),
        ]
    }

    #[test]
    fn test_crossing_interpolation() {
        assert_eq!(crossing(0.0, 1.0, 1.0, -1.0), Some(0.5));
        assert_eq!(crossing(0.0, 3.0, 4.0, -1.0), Some(3.0));
        assert_eq!(crossing(0.0, 1.0, 1.0, 2.0), None);
        assert_eq!(crossing(0.0, -1.0, 1.0, -2.0), None);
    }

    #[test]
    fn test_nearest() {
        assert_eq!(nearest(vec![1.0, 4.0, 9.0].into_iter(), 5.0), Some(4.0));
        assert_eq!(nearest(std::iter::empty(), 5.0), None);
    }

    #[test]
    fn test_stacked_clusters_cross_between_centroids() {
        let points = stacked();
        let split = ClassSplit::new(&points).unwrap();
        let boundary = rbf_boundary(&split, &ClassificationParameters::new(1.0, 0.1, 2));

        assert!(boundary.curve.len() >= 2);
        assert!(boundary.curve.windows(2).all(|w| w[0].x < w[1].x));
        // Centroids share x = 1, so the zero set is the horizontal line
        // through their midpoint
        let mid_y = split.midpoint().y;
        for p in &boundary.curve {
            assert!((p.y - mid_y).abs() < 0.2, "crossing at {p:?}");
        }
    }

    #[test]
    fn test_side_by_side_clusters_fall_back_to_rows() {
        let points: Vec<LabeledPoint> = stacked()
            .into_iter()
            .map(|p| LabeledPoint::new(p.y, p.x, p.label))
            .collect();
        let split = ClassSplit::new(&points).unwrap();
        let boundary = rbf_boundary(&split, &ClassificationParameters::new(1.0, 0.1, 2));

        assert!(boundary.curve.len() >= 2);
        assert!(boundary.curve.windows(2).all(|w| w[0].y < w[1].y));
        let mid_x = split.midpoint().x;
        for p in &boundary.curve {
            assert!((p.x - mid_x).abs() < 0.2, "crossing at {p:?}");
        }
    }

    #[test]
    fn test_regions_outline_each_class() {
        let split = ClassSplit::new(&stacked()).unwrap();
        let boundary = rbf_boundary(&split, &ClassificationParameters::default());
        let regions = boundary.regions.unwrap();

        assert!(!regions.positive.is_empty());
        assert!(!regions.negative.is_empty());
        assert_eq!(regions.positive.first(), regions.positive.last());
        assert!(regions.positive.iter().all(|p| p.y > 5.0));
        assert!(regions.negative.iter().all(|p| p.y < 2.0));
    }

    #[test]
    fn test_small_class_has_no_region() {
        let points = vec![
            LabeledPoint::negative(0.0, 0.0),
            LabeledPoint::negative(1.0, 0.0),
            LabeledPoint::negative(0.5, 1.0),
            LabeledPoint::positive(5.0, 5.0),
        ];
        let split = ClassSplit::new(&points).unwrap();
        let regions = rbf_boundary(&split, &ClassificationParameters::default())
            .regions
            .unwrap();
        assert!(regions.positive.is_empty());
        assert!(!regions.negative.is_empty());
    }
}
