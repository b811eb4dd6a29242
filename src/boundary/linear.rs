//! Straight boundaries and their margin band

use crate::core::{Boundary, Margins};
use crate::geometry::{offset_curves, ClassSplit, LinearSeparation};

/// Sampled separating line with margins translated along its normal
pub fn linear_boundary(split: &ClassSplit, linear: &LinearSeparation) -> Boundary {
    let curve = linear.line.sample(&split.padded_bounds());
    let (upper, lower) = offset_curves(&curve, &linear.line, linear.margin_width);
    Boundary {
        curve,
        margins: Some(Margins {
            upper,
            lower,
            width: linear.margin_width,
        }),
        regions: None,
    }
}

/// Margin curves around the sampled separating line
pub fn linear_margins(split: &ClassSplit, linear: &LinearSeparation) -> Margins {
    linear_boundary(split, linear).margins.unwrap_or_default()
}
