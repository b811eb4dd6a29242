//! Exploration report persistence
//!
//! A report captures one exploration run (scenario, kernel, parameters and
//! both outputs) as a JSON document the rendering layer or a later session
//! can load back.

use crate::api::Exploration;
use crate::core::{Boundary, ClassificationParameters, ClassificationResult, Result, VizError};
use crate::kernel::KernelKind;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Serializable record of one exploration run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationReport {
    /// Scenario name, or the data file the points came from
    pub scenario: String,
    pub kernel: KernelKind,
    pub parameters: ClassificationParameters,
    pub strict_separation: bool,
    pub n_points: usize,
    pub result: ClassificationResult,
    pub boundary: Boundary,
    pub metadata: ReportMetadata,
}

/// Provenance of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Library version used to create the report
    pub library_version: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl ReportMetadata {
    fn now() -> Self {
        Self {
            library_version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl ExplorationReport {
    pub fn new(
        scenario: impl Into<String>,
        exploration: Exploration,
        strict_separation: bool,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            kernel: exploration.kernel,
            parameters: exploration.parameters,
            strict_separation,
            n_points: exploration.result.predictions.len(),
            result: exploration.result,
            boundary: exploration.boundary,
            metadata: ReportMetadata::now(),
        }
    }

    /// Save report to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| VizError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load report from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let report = serde_json::from_reader(reader)
            .map_err(|e| VizError::SerializationError(e.to_string()))?;
        Ok(report)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| VizError::SerializationError(e.to_string()))
    }

    /// Print report summary
    pub fn print_summary(&self) {
        let matrix = &self.result.confusion_matrix;
        println!("=== Exploration Report ===");
        println!("Scenario: {}", self.scenario);
        println!("Kernel: {}", self.kernel);
        println!("Points: {}", self.n_points);
        println!("Parameters:");
        println!("  C: {}", self.parameters.c);
        println!("  Gamma: {}", self.parameters.gamma);
        println!("  Degree: {}", self.parameters.degree);
        println!("  Strict separation: {}", self.strict_separation);
        println!("Metrics:");
        println!("  Accuracy: {:.2}%", self.result.accuracy * 100.0);
        println!("  Precision: {:.4}", self.result.precision);
        println!("  Recall: {:.4}", self.result.recall);
        println!("  F1 Score: {:.4}", matrix.f1_score());
        println!(
            "  Confusion: TP={} FP={} TN={} FN={}",
            matrix.true_positives,
            matrix.false_positives,
            matrix.true_negatives,
            matrix.false_negatives
        );
        println!(
            "Support Vectors: {}",
            self.result.support_vector_indices.len()
        );
        println!("Boundary Points: {}", self.boundary.curve.len());
        if let Some(margins) = &self.boundary.margins {
            println!("Margin Width: {:.4}", margins.width);
        }
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Explorer;
    use crate::core::LabeledPoint;
    use tempfile::NamedTempFile;

    fn exploration(kernel: KernelKind) -> Exploration {
        let points = vec![
            LabeledPoint::negative(0.0, 0.0),
            LabeledPoint::negative(1.0, 0.0),
            LabeledPoint::positive(9.0, 9.0),
            LabeledPoint::positive(10.0, 9.0),
        ];
        Explorer::new(kernel).explore(&points).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let report = ExplorationReport::new("four points", exploration(KernelKind::Linear), false);

        assert_eq!(report.scenario, "four points");
        assert_eq!(report.n_points, 4);
        assert_eq!(report.metadata.library_version, env!("CARGO_PKG_VERSION"));
        assert!(chrono::DateTime::parse_from_rfc3339(&report.metadata.created_at).is_ok());
    }

    #[test]
    fn test_report_round_trip_through_file() -> Result<()> {
        let report =
            ExplorationReport::new("clusters", exploration(KernelKind::RadialBasis), false);
        let temp_file = NamedTempFile::new()?;

        report.save_to_file(temp_file.path())?;
        let loaded = ExplorationReport::load_from_file(temp_file.path())?;

        assert_eq!(loaded.kernel, KernelKind::RadialBasis);
        assert_eq!(loaded.result.support_vector_indices, report.result.support_vector_indices);
        assert_eq!(loaded.result.predictions, report.result.predictions);
        assert_eq!(loaded.boundary.curve.len(), report.boundary.curve.len());
        assert!(loaded.boundary.regions.is_some());
        Ok(())
    }

    #[test]
    fn test_json_uses_integer_labels() {
        let report = ExplorationReport::new("labels", exploration(KernelKind::Linear), false);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["kernel"], "linear");
        assert_eq!(json["result"]["predictions"][0], 0);
        assert_eq!(json["result"]["predictions"][3], 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ExplorationReport::load_from_file("/nonexistent/report.json");
        assert!(matches!(result, Err(VizError::IoError(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        use std::io::Write;
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{{ not json").unwrap();
        temp_file.flush().unwrap();

        assert!(matches!(
            ExplorationReport::load_from_file(temp_file.path()),
            Err(VizError::SerializationError(_))
        ));
    }
}
