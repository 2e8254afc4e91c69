//! Shared fixtures and assertions for rankwise tests.

use rankwise_common::entities::{Alternative, Dataset, Feature, RankingResult};

/// Default float tolerance for score comparisons.
pub const EPS: f64 = 1e-9;

/// Abbreviations of the preset alternatives, in preset order.
pub const PRESET_CODES: [&str; 4] = ["DPA", "SF", "HM", "SD"];

/// Find the preset alternative whose name ends with `(<code>)`.
pub fn preset_name(code: &str) -> String {
    Dataset::preset()
        .alternatives
        .into_iter()
        .map(|a| a.name)
        .find(|n| n.ends_with(&format!("({code})")))
        .unwrap_or_else(|| panic!("no preset alternative with code {code}"))
}

/// Score of the named alternative within a ranking result.
pub fn score_of(result: &RankingResult, name: &str) -> f64 {
    result
        .scores
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.score)
        .unwrap_or_else(|| panic!("no score for {name}"))
}

/// Build a dataset from `(name, more_is_better, weight)` and `(name, values)` tuples.
pub fn dataset(features: &[(&str, bool, f64)], alternatives: &[(&str, &[f64])]) -> Dataset {
    Dataset {
        features: features
            .iter()
            .map(|&(name, up, w)| Feature::new(name, up, w))
            .collect(),
        alternatives: alternatives
            .iter()
            .map(|&(name, values)| Alternative::new(name, values.to_vec()))
            .collect(),
    }
}

/// Assert two floats agree within `EPS`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

/// Assert two rows agree element-wise within `EPS`.
#[track_caller]
pub fn assert_rows_close(actual: &[f64], expected: &[f64]) {
    pretty_assertions::assert_eq!(actual.len(), expected.len(), "row length differs");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < EPS, "index {i}: expected {e}, got {a}");
    }
}
