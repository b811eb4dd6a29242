//! Polynomial boundaries: a line, an arch or a wave depending on degree

use crate::core::{Boundary, ClassificationParameters};
use crate::geometry::{ClassSplit, PolynomialCurve};

pub fn polynomial_boundary(split: &ClassSplit, params: &ClassificationParameters) -> Boundary {
    let curve = PolynomialCurve::for_degree(split, params).sample(&split.padded_bounds());
    Boundary {
        curve,
        margins: None,
        regions: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LabeledPoint;
    use crate::geometry::SeparatingLine;

    fn split() -> ClassSplit {
        ClassSplit::new(&[
            LabeledPoint::negative(0.0, 0.0),
            LabeledPoint::negative(2.0, 1.0),
            LabeledPoint::positive(8.0, 7.0),
            LabeledPoint::positive(10.0, 9.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_degree_one_is_the_separating_line() {
        let split = split();
        let params = ClassificationParameters::new(1.0, 0.1, 1);
        let boundary = polynomial_boundary(&split, &params);
        let line = SeparatingLine::between_centroids(&split, params.c);

        assert!(boundary.curve.len() >= 2);
        for p in &boundary.curve {
            assert!((p.y - line.y_at(p.x)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_higher_degrees_are_not_straight() {
        let split = split();
        for degree in [2, 3] {
            let params = ClassificationParameters::new(1.0, 0.1, degree);
            let curve = polynomial_boundary(&split, &params).curve;
            let first = curve[0];
            let last = curve[curve.len() - 1];
            let slope = (last.y - first.y) / (last.x - first.x);
            let max_deviation = curve
                .iter()
                .map(|p| (p.y - (first.y + slope * (p.x - first.x))).abs())
                .fold(0.0, f64::max);
            assert!(max_deviation > 0.5, "degree {degree} curve is flat");
        }
    }

    #[test]
    fn test_no_margins() {
        let boundary = polynomial_boundary(&split(), &ClassificationParameters::default());
        assert!(boundary.margins.is_none());
        assert!(boundary.regions.is_none());
    }
}
