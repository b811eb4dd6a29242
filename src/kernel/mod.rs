//! Kernel kinds and their pairwise affinity functions

pub mod linear;
pub mod polynomial;
pub mod rbf;
pub mod sigmoid;
pub mod traits;

pub use self::linear::*;
pub use self::polynomial::*;
pub use self::rbf::*;
pub use self::sigmoid::*;
pub use self::traits::*;

use crate::core::{ClassificationParameters, VizError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four boundary styles a dataset can be explored with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KernelKind {
    Linear,
    Polynomial,
    RadialBasis,
    Sigmoid,
}

impl KernelKind {
    pub const ALL: [KernelKind; 4] = [
        KernelKind::Linear,
        KernelKind::Polynomial,
        KernelKind::RadialBasis,
        KernelKind::Sigmoid,
    ];

    /// Build the affinity function for this kernel
    ///
    /// Parameters are expected to be validated already.
    ///
    /// # Panics
    /// Panics if the kernel uses gamma and it is not positive, or if the
    /// polynomial degree is zero. [`ClassificationParameters::validate`]
    /// rejects both.
    pub fn affinity(self, params: &ClassificationParameters) -> Box<dyn Affinity> {
        match self {
            KernelKind::Linear => Box::new(LinearAffinity::new()),
            KernelKind::Polynomial => Box::new(PolynomialAffinity::new(params.degree)),
            KernelKind::RadialBasis => Box::new(RbfAffinity::new(params.gamma)),
            KernelKind::Sigmoid => Box::new(SigmoidAffinity::new(params.gamma)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KernelKind::Linear => "linear",
            KernelKind::Polynomial => "polynomial",
            KernelKind::RadialBasis => "radial-basis",
            KernelKind::Sigmoid => "sigmoid",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelKind {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(KernelKind::Linear),
            "polynomial" | "poly" => Ok(KernelKind::Polynomial),
            "radial-basis" | "rbf" | "radial" => Ok(KernelKind::RadialBasis),
            "sigmoid" | "tanh" => Ok(KernelKind::Sigmoid),
            other => Err(VizError::InvalidParameter(format!(
                "Unknown kernel: {other}. Use linear, polynomial, rbf or sigmoid"
            ))),
        }
    }
}
