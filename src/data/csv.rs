//! CSV point sets
//!
//! Each data row is `x,y,label` where the label is 0 or 1. A header row is
//! detected automatically, blank lines and `#` comments are skipped.

use crate::core::{Dataset, Label, LabeledPoint, Result, VizError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Labeled point set loaded from a CSV file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvDataset {
    points: Vec<LabeledPoint>,
}

impl CsvDataset {
    /// Load a point set from a CSV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a point set, detecting a header on the first content line
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, true)
    }

    pub fn from_reader_with_options<R: BufRead>(
        reader: R,
        auto_detect_header: bool,
    ) -> Result<Self> {
        let mut points = Vec::new();
        let mut seen_content = false;

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let first = !seen_content;
            seen_content = true;
            if first && auto_detect_header && Self::is_header_line(line) {
                continue;
            }

            let point = Self::parse_data_line(line)
                .map_err(|e| match e {
                    VizError::ParseError(msg) => {
                        VizError::ParseError(format!("line {}: {}", number + 1, msg))
                    }
                    other => other,
                })?;
            points.push(point);
        }

        if points.is_empty() {
            return Err(VizError::EmptyDataset);
        }

        Ok(CsvDataset { points })
    }

    /// A line is a header when one of its coordinate fields is not a number
    fn is_header_line(line: &str) -> bool {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 3 {
            return false;
        }
        fields[..2].iter().any(|field| field.parse::<f64>().is_err())
    }

    fn parse_data_line(line: &str) -> Result<LabeledPoint> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if fields.len() != 3 {
            return Err(VizError::ParseError(format!(
                "expected 3 fields (x,y,label), found {}",
                fields.len()
            )));
        }

        let x = Self::parse_coordinate(fields[0], "x")?;
        let y = Self::parse_coordinate(fields[1], "y")?;
        let label = Self::parse_label(fields[2])?;

        Ok(LabeledPoint::new(x, y, label))
    }

    fn parse_coordinate(field: &str, axis: &str) -> Result<f64> {
        let value = field
            .parse::<f64>()
            .map_err(|_| VizError::ParseError(format!("invalid {axis} coordinate: {field}")))?;
        if !value.is_finite() {
            return Err(VizError::ParseError(format!(
                "non-finite {axis} coordinate: {field}"
            )));
        }
        Ok(value)
    }

    /// Labels may be written as `1` or `1.0`; anything but 0 or 1 is rejected
    fn parse_label(field: &str) -> Result<Label> {
        if let Ok(value) = field.parse::<i64>() {
            return Label::from_value(value);
        }
        let value = field
            .parse::<f64>()
            .map_err(|_| VizError::ParseError(format!("invalid label: {field}")))?;
        if value.fract() != 0.0 || !value.is_finite() {
            return Err(VizError::ParseError(format!("invalid label: {field}")));
        }
        Label::from_value(value as i64)
    }

    /// Consume the dataset, returning its points
    pub fn into_points(self) -> Vec<LabeledPoint> {
        self.points
    }
}

impl Dataset for CsvDataset {
    fn points(&self) -> &[LabeledPoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_csv_basic() {
        let data = "1.0,2.0,1\n3.0,4.0,0\n";
        let dataset = CsvDataset::from_reader(Cursor::new(data)).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.points()[0], LabeledPoint::positive(1.0, 2.0));
        assert_eq!(dataset.points()[1], LabeledPoint::negative(3.0, 4.0));
    }

    #[test]
    fn test_csv_with_headers() {
        let data = "x,y,label\n1.0,2.0,1\n3.0,4.0,0\n";
        let dataset = CsvDataset::from_reader(Cursor::new(data)).unwrap();

        assert_eq!(dataset.len(), 2);
        assert!(dataset.has_both_classes());
    }

    #[test]
    fn test_csv_header_after_comment() {
        let data = "# petal measurements\nlength,width,class\n1.0,2.0,1\n";
        let dataset = CsvDataset::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_csv_empty_lines_and_comments() {
        let data = "# Comment\n1.0,2.0,1\n\n   \n3.0,4.0,0\n";
        let dataset = CsvDataset::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_float_labels_accepted() {
        let data = "1.0,2.0,1.0\n3.0,4.0,0.0\n";
        let dataset = CsvDataset::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(dataset.count_label(Label::Positive), 1);
        assert_eq!(dataset.count_label(Label::Negative), 1);
    }

    #[test]
    fn test_invalid_labels_rejected() {
        let result = CsvDataset::from_reader(Cursor::new("1.0,2.0,-1\n"));
        assert!(matches!(result, Err(VizError::InvalidLabel(-1))));

        let result = CsvDataset::from_reader(Cursor::new("1.0,2.0,0.5\n"));
        assert!(matches!(result, Err(VizError::ParseError(_))));
    }

    #[test]
    fn test_csv_invalid_format() {
        // Too few fields
        let result = CsvDataset::from_reader(Cursor::new("1.0,1\n"));
        assert!(result.is_err());

        // Invalid number after the first line
        let result = CsvDataset::from_reader(Cursor::new("1.0,2.0,1\n1.0,abc,0\n"));
        match result {
            Err(VizError::ParseError(msg)) => assert!(msg.starts_with("line 2")),
            other => panic!("unexpected result: {other:?}"),
        }

        // Non-finite coordinates
        assert!(CsvDataset::from_reader(Cursor::new("NaN,2.0,1\n")).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            CsvDataset::from_reader(Cursor::new("")),
            Err(VizError::EmptyDataset)
        ));
        assert!(matches!(
            CsvDataset::from_reader(Cursor::new("x,y,label\n# nothing\n")),
            Err(VizError::EmptyDataset)
        ));
    }

    #[test]
    fn test_manual_header_control() {
        let data = "x,y,label\n1.0,2.0,1\n";
        assert!(CsvDataset::from_reader_with_options(Cursor::new(data), false).is_err());
    }

    #[test]
    fn test_is_header_line() {
        assert!(CsvDataset::is_header_line("x,y,label"));
        assert!(CsvDataset::is_header_line("sepal length, sepal width, class"));
        assert!(!CsvDataset::is_header_line("1.0,2.0,1"));
        assert!(!CsvDataset::is_header_line("x,y"));
    }

    #[test]
    fn test_classify_loaded_points() {
        use crate::core::ClassificationParameters;
        use crate::engine::classify;
        use crate::kernel::KernelKind;

        let data = "x,y,label\n0,0,0\n1,0,0\n9,9,1\n10,9,1\n";
        let dataset = CsvDataset::from_reader(Cursor::new(data)).unwrap();
        let result = classify(
            dataset.points(),
            &ClassificationParameters::default(),
            KernelKind::Linear,
        )
        .unwrap();
        assert_eq!(result.accuracy, 1.0);
    }
}
