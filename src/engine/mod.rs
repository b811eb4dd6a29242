//! Classification engine
//!
//! Predicts a label for every point from centroid affinities, tallies the
//! confusion matrix, and picks the points to present as support vectors.
//! Every call is a pure function of its inputs.

pub mod metrics;
pub mod score;
pub mod support;

pub use self::metrics::ConfusionMatrix;
pub use self::score::{strictness_scale, DecisionFunction, GRID_RESOLUTION};
pub use self::support::select_support_vectors;

use crate::boundary::linear::linear_margins;
use crate::core::{ClassificationParameters, ClassificationResult, Label, LabeledPoint, Margins, Result};
use crate::geometry::{ClassSplit, LinearSeparation, SeparationMode};
use crate::kernel::KernelKind;
use log::debug;

/// Classify `points` under `kernel` with the standard linear separation
///
/// Fails with `InsufficientClassDiversity` when either label is missing and
/// with `InvalidParameter` for out-of-range parameters.
pub fn classify(
    points: &[LabeledPoint],
    params: &ClassificationParameters,
    kernel: KernelKind,
) -> Result<ClassificationResult> {
    classify_with_mode(points, params, kernel, SeparationMode::Standard)
}

/// Classify with an explicit separation mode for the linear geometry
///
/// The mode only affects linear support-vector ranking and margins; the
/// predictions always come from the decision score.
pub fn classify_with_mode(
    points: &[LabeledPoint],
    params: &ClassificationParameters,
    kernel: KernelKind,
    mode: SeparationMode,
) -> Result<ClassificationResult> {
    params.validate()?;
    let split = ClassSplit::new(points)?;

    let decision = DecisionFunction::new(kernel, params, &split);
    let predictions: Vec<Label> = points.iter().map(|p| decision.predict(&p.point())).collect();
    let confusion_matrix = ConfusionMatrix::from_predictions(points, &predictions);

    let linear = LinearSeparation::resolve(&split, params.c, mode);
    let support_vector_indices = select_support_vectors(points, &split, kernel, params, &linear);

    let boundary_grid_samples = decision.grid(&split.bounds, GRID_RESOLUTION);

    let margins = if kernel == KernelKind::Linear {
        linear_margins(&split, &linear)
    } else {
        Margins::empty()
    };

    debug!(
        "Classified {} points with {kernel} kernel: accuracy {:.3}, {} support vectors",
        points.len(),
        confusion_matrix.accuracy(),
        support_vector_indices.len()
    );

    Ok(ClassificationResult {
        support_vector_indices,
        accuracy: confusion_matrix.accuracy(),
        precision: confusion_matrix.precision(),
        recall: confusion_matrix.recall(),
        confusion_matrix,
        predictions,
        boundary_grid_samples,
        margins,
    })
}
