//! Boundary geometry generator
//!
//! Synthesizes a renderable curve approximating where the classifier's
//! decision flips, using one of four independent strategies selected by the
//! kernel kind. Curves are best-effort visuals: a dataset missing one class
//! yields an empty boundary rather than an error.

pub mod linear;
pub mod polynomial;
pub mod rbf;
pub mod sigmoid;

pub use self::linear::{linear_boundary, linear_margins};
pub use self::polynomial::polynomial_boundary;
pub use self::rbf::rbf_boundary;
pub use self::sigmoid::sigmoid_boundary;

use crate::core::{Boundary, ClassificationParameters, LabeledPoint, Result, VizError};
use crate::geometry::{ClassSplit, LinearSeparation, SeparationMode};
use crate::kernel::KernelKind;
use log::debug;

/// Generate the boundary for `kernel` with the standard linear separation
pub fn generate_boundary(
    points: &[LabeledPoint],
    params: &ClassificationParameters,
    kernel: KernelKind,
) -> Result<Boundary> {
    generate_boundary_with_mode(points, params, kernel, SeparationMode::Standard)
}

/// Generate the boundary with an explicit separation mode
///
/// Only the linear kernel honours [`SeparationMode::Strict`]; polynomial
/// degree 1 reuses the separating line without the strict search. Fails only
/// for out-of-range parameters.
pub fn generate_boundary_with_mode(
    points: &[LabeledPoint],
    params: &ClassificationParameters,
    kernel: KernelKind,
    mode: SeparationMode,
) -> Result<Boundary> {
    params.validate()?;

    let split = match ClassSplit::new(points) {
        Ok(split) => split,
        Err(VizError::InsufficientClassDiversity {
            positives,
            negatives,
        }) => {
            debug!(
                "Nothing to draw: {positives} positive and {negatives} negative point(s)"
            );
            return Ok(Boundary::empty());
        }
        Err(e) => return Err(e),
    };

    let boundary = match kernel {
        KernelKind::Linear => {
            let linear = LinearSeparation::resolve(&split, params.c, mode);
            linear_boundary(&split, &linear)
        }
        KernelKind::Polynomial => polynomial_boundary(&split, params),
        KernelKind::RadialBasis => rbf_boundary(&split, params),
        KernelKind::Sigmoid => sigmoid_boundary(&split, params),
    };

    debug!(
        "Generated {kernel} boundary with {} point(s)",
        boundary.curve.len()
    );
    Ok(boundary)
}
