//! Scenario catalog entries
//!
//! A scenario is a JSON document bundling a named point set with the kernel
//! and parameters it is meant to be explored with, plus display metadata
//! for the rendering layer.

use crate::api::Explorer;
use crate::core::{ClassificationParameters, Dataset, LabeledPoint, Result, VizError};
use crate::kernel::KernelKind;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

/// Axis captions and class names shown next to the plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayLabels {
    pub x_axis: String,
    pub y_axis: String,
    pub negative_class: String,
    pub positive_class: String,
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self {
            x_axis: "x".to_string(),
            y_axis: "y".to_string(),
            negative_class: "Class 0".to_string(),
            positive_class: "Class 1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kernel: KernelKind,
    #[serde(default)]
    pub parameters: ClassificationParameters,
    /// Ask the linear geometry for a band free of any point
    #[serde(default)]
    pub strict_separation: bool,
    #[serde(default)]
    pub display: DisplayLabels,
    pub points: Vec<LabeledPoint>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, kernel: KernelKind, points: Vec<LabeledPoint>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kernel,
            parameters: ClassificationParameters::default(),
            strict_separation: false,
            display: DisplayLabels::default(),
            points,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let scenario: Scenario = serde_json::from_reader(reader)
            .map_err(|e| VizError::SerializationError(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|e| VizError::SerializationError(e.to_string()))
    }

    /// Check parameters and coordinates
    ///
    /// A single-class point set is a valid scenario; exploring it reports
    /// the missing class instead.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(VizError::InvalidDataset(
                "scenario name must not be empty".to_string(),
            ));
        }
        if self.points.is_empty() {
            return Err(VizError::EmptyDataset);
        }
        if let Some(index) = self
            .points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(VizError::InvalidDataset(format!(
                "point {index} has a non-finite coordinate"
            )));
        }
        self.parameters.validate()
    }

    /// Explorer configured with this scenario's kernel, parameters and mode
    pub fn explorer(&self) -> Explorer {
        Explorer::new(self.kernel)
            .with_params(self.parameters)
            .with_strict_separation(self.strict_separation)
    }
}

impl Dataset for Scenario {
    fn points(&self) -> &[LabeledPoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Label;

    const SCENARIO: &str = r#"{
        "name": "two clusters",
        "kernel": "radial-basis",
        "parameters": { "c": 2.0, "gamma": 0.5, "degree": 2 },
        "display": { "x_axis": "height", "y_axis": "weight" },
        "points": [
            { "x": 0.0, "y": 0.0, "label": 0 },
            { "x": 1.0, "y": 0.5, "label": 0 },
            { "x": 8.0, "y": 9.0, "label": 1 }
        ]
    }"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_reader(SCENARIO.as_bytes()).unwrap();

        assert_eq!(scenario.name, "two clusters");
        assert_eq!(scenario.kernel, KernelKind::RadialBasis);
        assert_eq!(scenario.parameters.c, 2.0);
        assert!(!scenario.strict_separation);
        assert_eq!(scenario.display.x_axis, "height");
        assert_eq!(scenario.display.positive_class, "Class 1");
        assert_eq!(scenario.count_label(Label::Negative), 2);
    }

    #[test]
    fn test_parameters_default_when_missing() {
        let json = r#"{"name":"s","kernel":"linear","points":[{"x":0,"y":0,"label":1}]}"#;
        let scenario = Scenario::from_reader(json.as_bytes()).unwrap();
        assert_eq!(scenario.parameters, ClassificationParameters::default());
    }

    #[test]
    fn test_rejects_bad_labels_and_parameters() {
        let json = r#"{"name":"s","kernel":"linear","points":[{"x":0,"y":0,"label":2}]}"#;
        assert!(Scenario::from_reader(json.as_bytes()).is_err());

        let json = r#"{"name":"s","kernel":"linear","parameters":{"c":50.0,"gamma":0.1,"degree":2},
            "points":[{"x":0,"y":0,"label":1}]}"#;
        assert!(matches!(
            Scenario::from_reader(json.as_bytes()),
            Err(VizError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_empty_points() {
        let json = r#"{"name":"s","kernel":"sigmoid","points":[]}"#;
        assert!(matches!(
            Scenario::from_reader(json.as_bytes()),
            Err(VizError::EmptyDataset)
        ));
    }

    #[test]
    fn test_explorer_carries_settings() {
        let mut scenario = Scenario::new(
            "strict",
            KernelKind::Linear,
            vec![LabeledPoint::negative(0.0, 0.0), LabeledPoint::positive(5.0, 5.0)],
        );
        scenario.strict_separation = true;
        scenario.parameters.c = 3.0;

        let explorer = scenario.explorer();
        assert_eq!(explorer.kernel(), KernelKind::Linear);
        assert_eq!(explorer.params().c, 3.0);
        assert!(explorer.strict_separation());
    }
}
