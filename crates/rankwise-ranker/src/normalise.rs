//! Min-max normalisation of the raw alternative × feature matrix.

use rankwise_common::entities::{Alternative, Feature, NormalizedAlternative};
use rankwise_common::error::{RankError, Result};

/// Min-max normalisation of a single cell, oriented by direction.
///
/// `more_is_better`: (v - min) / (max - min)
/// otherwise:        (max - v) / (max - min)
///
/// When `max == min` the feature has no discriminating power and the
/// result is 0 rather than NaN.
pub fn minmax_normalise(value: f64, min_val: f64, max_val: f64, more_is_better: bool) -> f64 {
    if max_val == min_val {
        return 0.0; // degenerate range
    }
    let range = max_val - min_val;
    if more_is_better {
        (value - min_val) / range
    } else {
        (max_val - value) / range
    }
}

/// Check every alternative has exactly one value per feature.
pub fn check_dimensions(alternatives: &[Alternative], features: &[Feature]) -> Result<()> {
    for alt in alternatives {
        if alt.values.len() != features.len() {
            return Err(RankError::DimensionMismatch {
                alternative: alt.name.clone(),
                expected: features.len(),
                found: alt.values.len(),
            });
        }
    }
    Ok(())
}

/// Rescale each feature column into [0, 1] across all alternatives.
/// Returns rows in the same order as `alternatives`.
pub fn normalize(
    alternatives: &[Alternative],
    features: &[Feature],
) -> Result<Vec<NormalizedAlternative>> {
    if alternatives.is_empty() {
        return Err(RankError::EmptyInput);
    }
    check_dimensions(alternatives, features)?;

    // (min, max) per feature column
    let bounds: Vec<(f64, f64)> = (0..features.len())
        .map(|i| {
            alternatives.iter().map(|a| a.values[i]).fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), v| (lo.min(v), hi.max(v)),
            )
        })
        .collect();

    for (feature, &(min, max)) in features.iter().zip(&bounds) {
        if max == min {
            tracing::debug!(feature = %feature.name, value = min, "Degenerate feature range, normalising to 0");
        }
    }

    let normalized = alternatives
        .iter()
        .map(|alt| NormalizedAlternative {
            name: alt.name.clone(),
            values: alt
                .values
                .iter()
                .zip(features.iter().zip(&bounds))
                .map(|(&v, (feature, &(min, max)))| {
                    minmax_normalise(v, min, max, feature.more_is_better)
                })
                .collect(),
        })
        .collect();

    Ok(normalized)
}
