//! Core traits for dataset access

use crate::core::{Label, LabeledPoint};

/// Read-only view of an ordered labeled point sequence
///
/// The engine and the generator never mutate a dataset; anything that can
/// hand out a slice of points can be explored.
pub trait Dataset {
    /// All points, in their stable order
    fn points(&self) -> &[LabeledPoint];

    /// Number of points
    fn len(&self) -> usize {
        self.points().len()
    }

    /// Check if the dataset is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of points carrying `label`
    fn count_label(&self, label: Label) -> usize {
        self.points().iter().filter(|p| p.label == label).count()
    }

    /// Whether both labels are present
    fn has_both_classes(&self) -> bool {
        self.count_label(Label::Positive) > 0 && self.count_label(Label::Negative) > 0
    }
}

impl Dataset for [LabeledPoint] {
    fn points(&self) -> &[LabeledPoint] {
        self
    }
}

impl Dataset for Vec<LabeledPoint> {
    fn points(&self) -> &[LabeledPoint] {
        self.as_slice()
    }
}
