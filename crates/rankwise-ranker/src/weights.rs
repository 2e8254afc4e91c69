//! Weight diagnostics for the additive rule.
//!
//! Weights are taken positionally from the feature list and are never
//! rescaled. These helpers only report on them.

use rankwise_common::entities::Feature;

/// Weights in feature order.
pub fn weight_vector(features: &[Feature]) -> Vec<f64> {
    features.iter().map(|f| f.weight).collect()
}

pub fn weight_sum(features: &[Feature]) -> f64 {
    features.iter().map(|f| f.weight).sum()
}

/// Whether the weights sum to ~1.0
pub fn weights_sum_to_one(features: &[Feature]) -> bool {
    (weight_sum(features) - 1.0).abs() < 1e-6
}
