//! High-level exploration API
//!
//! [`Explorer`] collects the kernel, the tuning knobs and the separation
//! mode once, then classifies point sets and generates their boundaries.
//!
//! # Quick Start
//!
//! ```rust
//! use svmviz::api::Explorer;
//! use svmviz::core::LabeledPoint;
//! use svmviz::kernel::KernelKind;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let points = vec![
//!     LabeledPoint::negative(0.0, 0.0),
//!     LabeledPoint::negative(1.0, 0.0),
//!     LabeledPoint::positive(9.0, 9.0),
//!     LabeledPoint::positive(10.0, 9.0),
//! ];
//!
//! let exploration = Explorer::new(KernelKind::Linear)
//!     .with_c(2.0)
//!     .explore(&points)?;
//!
//! println!("Accuracy: {:.2}%", exploration.result.accuracy * 100.0);
//! println!("Boundary points: {}", exploration.boundary.curve.len());
//! # Ok(())
//! # }
//! ```

use crate::boundary::generate_boundary_with_mode;
use crate::core::{Boundary, ClassificationParameters, ClassificationResult, Dataset, Result};
use crate::data::CsvDataset;
use crate::engine::classify_with_mode;
use crate::geometry::SeparationMode;
use crate::kernel::KernelKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Builder bundling everything a classification or boundary call needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explorer {
    kernel: KernelKind,
    params: ClassificationParameters,
    mode: SeparationMode,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(KernelKind::Linear)
    }
}

impl Explorer {
    /// Explorer for `kernel` with default parameters and standard separation
    pub fn new(kernel: KernelKind) -> Self {
        Self {
            kernel,
            params: ClassificationParameters::default(),
            mode: SeparationMode::Standard,
        }
    }

    pub fn with_kernel(mut self, kernel: KernelKind) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set strictness C
    pub fn with_c(mut self, c: f64) -> Self {
        self.params.c = c;
        self
    }

    /// Set kernel sensitivity gamma
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.params.gamma = gamma;
        self
    }

    /// Set the polynomial degree
    pub fn with_degree(mut self, degree: u32) -> Self {
        self.params.degree = degree;
        self
    }

    /// Replace all tuning knobs at once
    pub fn with_params(mut self, params: ClassificationParameters) -> Self {
        self.params = params;
        self
    }

    /// Request a margin band that contains no point (linear geometry only)
    pub fn with_strict_separation(mut self, strict: bool) -> Self {
        self.mode = if strict {
            SeparationMode::Strict
        } else {
            SeparationMode::Standard
        };
        self
    }

    pub fn kernel(&self) -> KernelKind {
        self.kernel
    }

    pub fn params(&self) -> &ClassificationParameters {
        &self.params
    }

    pub fn strict_separation(&self) -> bool {
        self.mode == SeparationMode::Strict
    }

    /// Run the classification engine on a dataset
    pub fn classify<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<ClassificationResult> {
        classify_with_mode(dataset.points(), &self.params, self.kernel, self.mode)
    }

    /// Generate the boundary geometry for a dataset
    ///
    /// A dataset missing one class yields an empty boundary, not an error.
    pub fn boundary<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<Boundary> {
        generate_boundary_with_mode(dataset.points(), &self.params, self.kernel, self.mode)
    }

    /// Classify and generate the boundary in one go
    pub fn explore<D: Dataset + ?Sized>(&self, dataset: &D) -> Result<Exploration> {
        Ok(Exploration {
            kernel: self.kernel,
            parameters: self.params,
            result: self.classify(dataset)?,
            boundary: self.boundary(dataset)?,
        })
    }

    /// Explore the points of a CSV file
    pub fn explore_csv<P: AsRef<Path>>(&self, path: P) -> Result<Exploration> {
        let dataset = CsvDataset::from_file(path)?;
        self.explore(&dataset)
    }
}

/// Everything the rendering layer needs for one parameter setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exploration {
    pub kernel: KernelKind,
    pub parameters: ClassificationParameters,
    pub result: ClassificationResult,
    pub boundary: Boundary,
}

impl Exploration {
    /// Indices of the points whose prediction disagrees with their label
    pub fn misclassified<D: Dataset + ?Sized>(&self, dataset: &D) -> Vec<usize> {
        dataset
            .points()
            .iter()
            .zip(self.result.predictions.iter())
            .enumerate()
            .filter(|(_, (point, predicted))| point.label != **predicted)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;

    /// Explore a CSV file with the default parameters of `kernel`
    pub fn explore_csv<P: AsRef<Path>>(path: P, kernel: KernelKind) -> Result<Exploration> {
        Explorer::new(kernel).explore_csv(path)
    }

    /// Accuracy of every kernel on the same dataset, in [`KernelKind::ALL`] order
    pub fn compare_kernels<D: Dataset + ?Sized>(
        dataset: &D,
        params: &ClassificationParameters,
    ) -> Result<Vec<(KernelKind, f64)>> {
        KernelKind::ALL
            .iter()
            .map(|&kernel| {
                let result = Explorer::new(kernel).with_params(*params).classify(dataset)?;
                Ok((kernel, result.accuracy))
            })
            .collect()
    }
}
