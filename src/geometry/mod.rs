//! Shared 2D geometry: class partitions, separating curves, hulls, smoothing

pub mod bounds;
pub mod hull;
pub mod separation;
pub mod smoothing;

pub use self::bounds::{linspace, Bounds};
pub use self::hull::{centroid, chaikin_closed, cluster_outline, convex_hull, inflate};
pub use self::separation::{
    margin_width, offset_curves, ClassSplit, LinearSeparation, PolynomialCurve, SeparatingLine,
    SeparationMode, StrictSeparation,
};
pub use self::smoothing::{moving_average, smooth_curve};
