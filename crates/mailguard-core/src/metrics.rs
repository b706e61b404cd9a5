//! Classifier evaluation metrics shown in the chart panel
//!
//! The payload is produced outside Mail Guard (by the model training run) and
//! handed over as a JSON array of four scores. It is validated here, once, so
//! the chart never has to deal with a wrong-shaped payload.

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Number of metrics in a payload
pub const METRIC_COUNT: usize = 4;

/// Fixed category labels, in payload order
pub const METRIC_LABELS: [&str; METRIC_COUNT] = ["Accuracy", "Precision", "Recall", "F1 Score"];

/// Validated accuracy/precision/recall/F1 scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsVector([f64; METRIC_COUNT]);

impl MetricsVector {
    /// Build from raw values, rejecting anything outside `[0, 1]`.
    pub fn new(values: [f64; METRIC_COUNT]) -> Result<Self> {
        for (label, value) in METRIC_LABELS.iter().zip(values.iter()) {
            if !value.is_finite() {
                return Err(Error::malformed_metrics(format!(
                    "{label} is not a finite number"
                )));
            }
            if !(0.0..=1.0).contains(value) {
                return Err(Error::malformed_metrics(format!(
                    "{label} = {value} is outside [0, 1]"
                )));
            }
        }
        Ok(Self(values))
    }

    /// Parse the embedded JSON payload (`[acc, prec, recall, f1]`).
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| Error::malformed_metrics(format!("invalid JSON: {e}")))?;

        let items = value
            .as_array()
            .ok_or_else(|| Error::malformed_metrics("expected a JSON array"))?;

        if items.len() != METRIC_COUNT {
            return Err(Error::malformed_metrics(format!(
                "expected {METRIC_COUNT} values, found {}",
                items.len()
            )));
        }

        let mut values = [0.0; METRIC_COUNT];
        for (i, item) in items.iter().enumerate() {
            values[i] = item.as_f64().ok_or_else(|| {
                Error::malformed_metrics(format!("{} is not a number", METRIC_LABELS[i]))
            })?;
        }

        Self::new(values)
    }

    /// Read and parse a payload file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path)?;
        Self::from_json(&payload)
    }

    pub fn values(&self) -> [f64; METRIC_COUNT] {
        self.0
    }

    pub fn accuracy(&self) -> f64 {
        self.0[0]
    }

    pub fn precision(&self) -> f64 {
        self.0[1]
    }

    pub fn recall(&self) -> f64 {
        self.0[2]
    }

    pub fn f1(&self) -> f64 {
        self.0[3]
    }

    /// `(label, value)` pairs in display order
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        METRIC_LABELS.iter().copied().zip(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_payload() {
        let m = MetricsVector::from_json("[0.95, 0.90, 0.88, 0.89]").unwrap();
        assert_eq!(m.accuracy(), 0.95);
        assert_eq!(m.precision(), 0.90);
        assert_eq!(m.recall(), 0.88);
        assert_eq!(m.f1(), 0.89);
    }

    #[test]
    fn test_integer_bounds_accepted() {
        let m = MetricsVector::from_json("[0, 1, 1, 0]").unwrap();
        assert_eq!(m.values(), [0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_labelled_order() {
        let m = MetricsVector::from_json("[0.1, 0.2, 0.3, 0.4]").unwrap();
        let labels: Vec<_> = m.labelled().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Accuracy", "Precision", "Recall", "F1 Score"]);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = MetricsVector::from_json("[0.9, 0.8, 0.7]").unwrap_err();
        assert!(matches!(err, Error::MalformedMetrics { .. }));
        assert!(err.to_string().contains("found 3"));

        assert!(MetricsVector::from_json("[0.9, 0.8, 0.7, 0.6, 0.5]").is_err());
        assert!(MetricsVector::from_json("[]").is_err());
    }

    #[test]
    fn test_non_array_rejected() {
        let err = MetricsVector::from_json(r#"{"accuracy": 0.9}"#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = MetricsVector::from_json(r#"[0.9, "0.8", 0.7, 0.6]"#).unwrap_err();
        assert!(err.to_string().contains("Precision"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = MetricsVector::from_json("[0.9, 1.2, 0.7, 0.6]").unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
        assert!(MetricsVector::from_json("[-0.1, 0.2, 0.3, 0.4]").is_err());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = MetricsVector::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::MalformedMetrics { .. }));
    }

    #[test]
    fn test_nan_rejected_by_constructor() {
        assert!(MetricsVector::new([f64::NAN, 0.5, 0.5, 0.5]).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[0.95, 0.90, 0.88, 0.89]").unwrap();
        let m = MetricsVector::from_file(file.path()).unwrap();
        assert_eq!(m.f1(), 0.89);
    }

    #[test]
    fn test_from_missing_file() {
        let err = MetricsVector::from_file(Path::new("/nonexistent/metrics.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
