//! Class-separation geometry
//!
//! The separating line and the polynomial boundary curve are computed once
//! here and consumed both by support-vector ranking in the engine and by
//! curve rendering in the boundary generator, so the two never drift apart.

use crate::core::{ClassificationParameters, LabeledPoint, Point, Result, VizError};
use crate::geometry::bounds::{linspace, Bounds};
use crate::geometry::hull::centroid;
use log::{debug, warn};
use std::f64::consts::PI;

/// Fraction of each range added around the data for rendering
pub const PADDING_FRACTION: f64 = 0.1;

/// Where the separating line is anchored between the centroids (0 = negative, 1 = positive)
pub const CENTROID_BLEND: f64 = 0.6;

/// Intercept shift per unit of C above 1, as a fraction of the y-range
pub const C_SHIFT_FRACTION: f64 = 0.03;

/// Base margin width as a fraction of the y-range, before dividing by C + 0.1
pub const BASE_MARGIN_FRACTION: f64 = 0.1;

/// Finite stand-in for a vertical slope
pub const VERTICAL_SLOPE: f64 = 1e6;

/// Number of x samples for a rendered separating line
pub const LINE_SAMPLES: usize = 50;

/// Number of x samples for a rendered polynomial curve
pub const POLYNOMIAL_SAMPLES: usize = 100;

const STRICT_MAX_ATTEMPTS: usize = 10;
const STRICT_BACKOFF: f64 = 0.8;
const DEGENERATE_DX: f64 = 1e-9;
/// Below this slope the edge crossings are too far out to draw
const MIN_EDGE_SLOPE: f64 = 1e-9;

/// A dataset partitioned by label, with per-class centroids
#[derive(Debug, Clone)]
pub struct ClassSplit {
    pub positives: Vec<Point>,
    pub negatives: Vec<Point>,
    pub positive_centroid: Point,
    pub negative_centroid: Point,
    /// Bounding box of all points
    pub bounds: Bounds,
}

impl ClassSplit {
    /// Partition `points` by label
    ///
    /// Fails with `InsufficientClassDiversity` when either class is empty,
    /// before any centroid is computed.
    pub fn new(points: &[LabeledPoint]) -> Result<Self> {
        let (positives, negatives): (Vec<&LabeledPoint>, Vec<&LabeledPoint>) =
            points.iter().partition(|p| p.label.is_positive());

        if positives.is_empty() || negatives.is_empty() {
            return Err(VizError::InsufficientClassDiversity {
                positives: positives.len(),
                negatives: negatives.len(),
            });
        }

        let positives: Vec<Point> = positives.iter().map(|p| p.point()).collect();
        let negatives: Vec<Point> = negatives.iter().map(|p| p.point()).collect();
        let bounds = Bounds::from_points(points.iter().map(|p| p.point()))
            .ok_or(VizError::EmptyDataset)?;
        let positive_centroid = centroid(&positives).ok_or(VizError::EmptyDataset)?;
        let negative_centroid = centroid(&negatives).ok_or(VizError::EmptyDataset)?;

        Ok(Self {
            positive_centroid,
            negative_centroid,
            positives,
            negatives,
            bounds,
        })
    }

    /// Midpoint between the two class centroids
    pub fn midpoint(&self) -> Point {
        self.negative_centroid.lerp(&self.positive_centroid, 0.5)
    }

    /// Bounds grown by [`PADDING_FRACTION`] for rendering
    pub fn padded_bounds(&self) -> Bounds {
        self.bounds.padded(PADDING_FRACTION)
    }
}

/// Straight boundary `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatingLine {
    pub slope: f64,
    pub intercept: f64,
}

impl SeparatingLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Line through the 0.6 blend point of the centroids, shifted by C
    ///
    /// The slope is `-(posY - negY) / (posX - negX)`. Centroids sharing an x
    /// coordinate get [`VERTICAL_SLOPE`] instead of an infinite slope. Larger C
    /// moves the line towards the positive centroid.
    pub fn between_centroids(split: &ClassSplit, c: f64) -> Self {
        let pos = split.positive_centroid;
        let neg = split.negative_centroid;
        let slope = centroid_slope(&pos, &neg);

        let anchor = neg.lerp(&pos, CENTROID_BLEND);
        let mut line = Self::new(slope, anchor.y - slope * anchor.x);

        let toward_positive = if line.side(&pos) < 0.0 { -1.0 } else { 1.0 };
        line.intercept += toward_positive * (c - 1.0) * split.bounds.y_range() * C_SHIFT_FRACTION;
        line
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Signed vertical offset of `p` above the line
    pub fn side(&self, p: &Point) -> f64 {
        p.y - self.y_at(p.x)
    }

    /// Perpendicular distance from `p` to the line
    pub fn perpendicular_distance(&self, p: &Point) -> f64 {
        self.side(p).abs() / self.slope.hypot(1.0)
    }

    /// Unit normal pointing to the side where y grows
    pub fn unit_normal(&self) -> Point {
        let norm = self.slope.hypot(1.0);
        Point::new(-self.slope / norm, 1.0 / norm)
    }

    /// Sample the line across the padded box
    ///
    /// Samples leaving the padded y-range are dropped. A steep line that keeps
    /// fewer than two samples is drawn between its crossings of the top and
    /// bottom edges instead. A line that misses the box entirely is drawn
    /// along the nearest edge, so every returned point is finite.
    pub fn sample(&self, padded: &Bounds) -> Vec<Point> {
        let points: Vec<Point> = linspace(padded.min_x, padded.max_x, LINE_SAMPLES)
            .into_iter()
            .map(|x| Point::new(x, self.y_at(x)))
            .filter(|p| padded.contains_y(p.y))
            .collect();

        if points.len() >= 2 {
            return points;
        }

        if self.slope.abs() >= MIN_EDGE_SLOPE {
            let x_at = |y: f64| (y - self.intercept) / self.slope;
            let mut edges = vec![
                Point::new(x_at(padded.min_y), padded.min_y),
                Point::new(x_at(padded.max_y), padded.max_y),
            ];
            edges.sort_by(|a, b| a.x.total_cmp(&b.x));
            if edges[0].x <= padded.max_x && edges[1].x >= padded.min_x {
                for edge in edges.iter_mut() {
                    edge.x = edge.x.clamp(padded.min_x, padded.max_x);
                }
                return edges;
            }
        }

        debug!("Separating line misses the padded box; drawing it along the nearest edge");
        let clamp_y = |y: f64| y.clamp(padded.min_y, padded.max_y);
        vec![
            Point::new(padded.min_x, clamp_y(self.y_at(padded.min_x))),
            Point::new(padded.max_x, clamp_y(self.y_at(padded.max_x))),
        ]
    }
}

fn centroid_slope(pos: &Point, neg: &Point) -> f64 {
    let dx = pos.x - neg.x;
    let dy = pos.y - neg.y;
    if dx.abs() < DEGENERATE_DX {
        debug!("Class centroids share an x coordinate; using a vertical slope");
        if dy > 0.0 {
            -VERTICAL_SLOPE
        } else {
            VERTICAL_SLOPE
        }
    } else {
        -dy / dx
    }
}

/// Margin width for a given C: `0.1 * yRange / (C + 0.1)`
pub fn margin_width(y_range: f64, c: f64) -> f64 {
    BASE_MARGIN_FRACTION * y_range / (c + 0.1)
}

/// A separating line whose margin band holds no points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrictSeparation {
    pub line: SeparatingLine,
    /// Perpendicular half-width of the empty band
    pub width: f64,
    /// Attempts used, 1 when the first width already fit
    pub attempts: usize,
}

impl StrictSeparation {
    /// Search an intercept that keeps both classes outside a margin band
    ///
    /// The slope is taken from `line`. Each attempt computes the interval of
    /// intercepts whose band of half-width `width` separates the classes; an
    /// empty interval shrinks the width by 0.8, up to 10 attempts. The chosen
    /// intercept is `line`'s own, clamped into the interval.
    pub fn search(split: &ClassSplit, line: &SeparatingLine, initial_width: f64) -> Option<Self> {
        let slope = line.slope;
        let offset = |p: &Point| p.y - slope * p.x;
        let scale = slope.hypot(1.0);

        let positive_above = offset(&split.positive_centroid) >= offset(&split.negative_centroid);
        let (below, above) = if positive_above {
            (&split.negatives, &split.positives)
        } else {
            (&split.positives, &split.negatives)
        };

        let below_max = below.iter().map(offset).fold(f64::NEG_INFINITY, f64::max);
        let above_min = above.iter().map(offset).fold(f64::INFINITY, f64::min);

        let mut width = initial_width;
        for attempt in 1..=STRICT_MAX_ATTEMPTS {
            let half_band = width * scale;
            let low = below_max + half_band;
            let high = above_min - half_band;
            if low < high {
                return Some(Self {
                    line: SeparatingLine::new(slope, line.intercept.clamp(low, high)),
                    width,
                    attempts: attempt,
                });
            }
            width *= STRICT_BACKOFF;
        }

        None
    }
}

/// Whether the linear boundary must keep its margin band empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparationMode {
    #[default]
    Standard,
    /// Search an intercept and margin that leave no point inside the band
    Strict,
}

/// The linear boundary as consumed by both the engine and the generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSeparation {
    pub line: SeparatingLine,
    pub margin_width: f64,
    /// True when the strict search succeeded
    pub strict: bool,
}

impl LinearSeparation {
    pub fn resolve(split: &ClassSplit, c: f64, mode: SeparationMode) -> Self {
        let line = SeparatingLine::between_centroids(split, c);
        let width = margin_width(split.bounds.y_range(), c);

        if mode == SeparationMode::Strict {
            match StrictSeparation::search(split, &line, width) {
                Some(found) => {
                    debug!(
                        "Strict separation found after {} attempt(s), margin width {:.4}",
                        found.attempts, found.width
                    );
                    return Self {
                        line: found.line,
                        margin_width: found.width,
                        strict: true,
                    };
                }
                None => warn!(
                    "No strictly separating intercept after {STRICT_MAX_ATTEMPTS} attempts; using the regular line"
                ),
            }
        }

        Self {
            line,
            margin_width: width,
            strict: false,
        }
    }
}

/// Offset every curve point along the line's unit normal, both ways
pub fn offset_curves(curve: &[Point], line: &SeparatingLine, width: f64) -> (Vec<Point>, Vec<Point>) {
    let normal = line.unit_normal();
    let shift = |p: &Point, sign: f64| {
        Point::new(p.x + sign * normal.x * width, p.y + sign * normal.y * width)
    };
    let upper = curve.iter().map(|p| shift(p, 1.0)).collect();
    let lower = curve.iter().map(|p| shift(p, -1.0)).collect();
    (upper, lower)
}

/// Boundary curve used for the polynomial kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolynomialCurve {
    /// Degree 1: the plain separating line
    Line(SeparatingLine),
    /// Degree 2: one sine arch plus a tilt following the separating slope
    Arch {
        mid: Point,
        half_range: f64,
        amplitude: f64,
        tilt: f64,
    },
    /// Degree 3: two-frequency sine sum
    Wave {
        mid: Point,
        half_range: f64,
        amplitude: f64,
    },
}

impl PolynomialCurve {
    pub const ARCH_AMPLITUDE: f64 = 0.2;
    pub const WAVE_AMPLITUDE: f64 = 0.25;
    pub const WAVE_OVERTONE: f64 = 0.3;

    pub fn for_degree(split: &ClassSplit, params: &ClassificationParameters) -> Self {
        let line = SeparatingLine::between_centroids(split, params.c);
        let mid = split.midpoint();
        let half_range = split.bounds.x_range() / 2.0;
        let y_range = split.bounds.y_range();

        match params.degree {
            1 => PolynomialCurve::Line(line),
            2 => PolynomialCurve::Arch {
                mid,
                half_range,
                amplitude: Self::ARCH_AMPLITUDE * y_range,
                tilt: line.slope.clamp(-2.0, 2.0) * 0.5,
            },
            _ => PolynomialCurve::Wave {
                mid,
                half_range,
                amplitude: Self::WAVE_AMPLITUDE * y_range,
            },
        }
    }

    pub fn y_at(&self, x: f64) -> f64 {
        match *self {
            PolynomialCurve::Line(line) => line.y_at(x),
            PolynomialCurve::Arch {
                mid,
                half_range,
                amplitude,
                tilt,
            } => {
                let t = (x - mid.x) / half_range;
                mid.y + amplitude * (t * PI).sin() + tilt * (x - mid.x)
            }
            PolynomialCurve::Wave {
                mid,
                half_range,
                amplitude,
            } => {
                let t = (x - mid.x) / half_range;
                mid.y
                    + amplitude
                        * ((t * 2.0 * PI).sin() + Self::WAVE_OVERTONE * (t * 4.0 * PI).sin())
            }
        }
    }

    /// Absolute vertical distance from `p` to the curve
    pub fn vertical_distance(&self, p: &Point) -> f64 {
        (p.y - self.y_at(p.x)).abs()
    }

    /// Sample the curve across the padded box
    pub fn sample(&self, padded: &Bounds) -> Vec<Point> {
        match self {
            PolynomialCurve::Line(line) => line.sample(padded),
            _ => linspace(padded.min_x, padded.max_x, POLYNOMIAL_SAMPLES)
                .into_iter()
                .map(|x| Point::new(x, self.y_at(x)))
                .collect(),
        }
    }
}
