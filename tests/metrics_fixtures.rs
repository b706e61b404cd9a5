//! Metrics payload fixtures load or are rejected at the boundary

use std::path::PathBuf;

use mailguard_app::state::MetricsPanel;
use mailguard_core::{MetricsVector, METRIC_LABELS};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/metrics")
        .join(name)
}

#[test]
fn test_valid_fixture_loads() {
    let metrics = MetricsVector::from_file(&fixture("valid.json")).expect("valid payload");
    let labelled: Vec<_> = metrics.labelled().collect();

    assert_eq!(labelled.len(), METRIC_LABELS.len());
    assert_eq!(labelled[0], ("Accuracy", 0.95));
    assert_eq!(labelled[3], ("F1 Score", 0.89));
}

#[test]
fn test_short_fixture_rejected() {
    let err = MetricsVector::from_file(&fixture("too_short.json")).unwrap_err();
    assert!(err.to_string().contains("expected 4 values"));
}

#[test]
fn test_out_of_range_fixture_rejected() {
    let panel = MetricsPanel::load(&fixture("out_of_range.json"));
    match panel {
        MetricsPanel::Unavailable { reason } => assert!(reason.contains("Precision")),
        MetricsPanel::Loaded(_) => panic!("out of range payload must be rejected"),
    }
}

#[test]
fn test_object_fixture_rejected() {
    let err = MetricsVector::from_file(&fixture("not_an_array.json")).unwrap_err();
    assert!(err.to_string().contains("expected a JSON array"));
}
