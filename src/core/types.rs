//! Core type definitions shared by the engine and the boundary generator

use crate::core::{Result, VizError};
use crate::engine::metrics::ConfusionMatrix;
use serde::{Deserialize, Serialize};

/// A position in the 2D feature space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Binary class label, serialized as the integer 0 or 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Parse a numeric label, accepting only 0 and 1
    pub fn from_value(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(VizError::InvalidLabel(other)),
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }

    pub fn is_positive(self) -> bool {
        self == Label::Positive
    }
}

impl TryFrom<i64> for Label {
    type Error = VizError;

    fn try_from(value: i64) -> Result<Self> {
        Label::from_value(value)
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.value()
    }
}

/// One labeled sample in the feature space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

impl LabeledPoint {
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self { x, y, label }
    }

    /// Shorthand for a positive (label 1) sample
    pub fn positive(x: f64, y: f64) -> Self {
        Self::new(x, y, Label::Positive)
    }

    /// Shorthand for a negative (label 0) sample
    pub fn negative(x: f64, y: f64) -> Self {
        Self::new(x, y, Label::Negative)
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Caller-supplied tuning knobs, re-read on every call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationParameters {
    /// Strictness, in [0.1, 10]
    pub c: f64,
    /// Kernel sensitivity, in [0.01, 1]
    pub gamma: f64,
    /// Polynomial degree, 1 to 3 (ignored by the other kernels)
    pub degree: u32,
}

impl ClassificationParameters {
    pub const C_RANGE: (f64, f64) = (0.1, 10.0);
    pub const GAMMA_RANGE: (f64, f64) = (0.01, 1.0);
    pub const DEGREE_RANGE: (u32, u32) = (1, 3);

    pub fn new(c: f64, gamma: f64, degree: u32) -> Self {
        Self { c, gamma, degree }
    }

    /// Check that every parameter lies in its documented range
    pub fn validate(&self) -> Result<()> {
        let (c_min, c_max) = Self::C_RANGE;
        if !self.c.is_finite() || self.c < c_min || self.c > c_max {
            return Err(VizError::InvalidParameter(format!(
                "C must be in [{c_min}, {c_max}], got: {}",
                self.c
            )));
        }

        let (g_min, g_max) = Self::GAMMA_RANGE;
        if !self.gamma.is_finite() || self.gamma < g_min || self.gamma > g_max {
            return Err(VizError::InvalidParameter(format!(
                "gamma must be in [{g_min}, {g_max}], got: {}",
                self.gamma
            )));
        }

        let (d_min, d_max) = Self::DEGREE_RANGE;
        if self.degree < d_min || self.degree > d_max {
            return Err(VizError::InvalidParameter(format!(
                "polynomial degree must be in {d_min}..={d_max}, got: {}",
                self.degree
            )));
        }

        Ok(())
    }
}

impl Default for ClassificationParameters {
    fn default() -> Self {
        Self {
            c: 1.0,
            gamma: 0.1,
            degree: 2,
        }
    }
}

/// Decision score sampled at one grid position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSample {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Parallel offset curves around a linear boundary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub upper: Vec<Point>,
    pub lower: Vec<Point>,
    /// Perpendicular distance between the boundary and each offset curve
    pub width: f64,
}

impl Margins {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty() && self.lower.is_empty()
    }
}

/// Output of the classification engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Sorted, duplicate-free indices into the input dataset
    pub support_vector_indices: Vec<usize>,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub confusion_matrix: ConfusionMatrix,
    /// Predicted label for every input point, in input order
    pub predictions: Vec<Label>,
    pub boundary_grid_samples: Vec<GridSample>,
    pub margins: Margins,
}

impl ClassificationResult {
    /// Whether the point at `index` was selected as a support vector
    pub fn is_support_vector(&self, index: usize) -> bool {
        self.support_vector_indices.binary_search(&index).is_ok()
    }
}

/// Closed outlines drawn around each class (radial-basis only)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassRegions {
    pub positive: Vec<Point>,
    pub negative: Vec<Point>,
}

/// Output of the boundary generator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Boundary {
    pub curve: Vec<Point>,
    pub margins: Option<Margins>,
    pub regions: Option<ClassRegions>,
}

impl Boundary {
    /// A boundary with nothing to draw
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }
}
