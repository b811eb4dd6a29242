//! Heuristic SVM visualization engine
//!
//! Approximates what a support vector machine would do on a 2D point set
//! (predictions, metrics, support vectors, margins and decision-boundary
//! curves) without solving the SVM optimization problem. Results are meant
//! for interactive teaching tools, not for analysis.

pub mod api;
pub mod boundary;
pub mod core;
pub mod data;
pub mod engine;
pub mod geometry;
pub mod kernel;
pub mod report;
pub mod utils;

// Re-export main types for convenience
pub use crate::api::{Exploration, Explorer};
pub use crate::boundary::generate_boundary;
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{Result, VizError};
pub use crate::data::{CsvDataset, Scenario};
pub use crate::engine::{classify, ConfusionMatrix};
pub use crate::kernel::KernelKind;
pub use crate::report::ExplorationReport;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
