//! Full ranking pipeline: normalise once, then score under each rule.

use rankwise_common::entities::{
    Alternative, Dataset, DecisionRule, Feature, RankingReport, RankingResult,
};
use rankwise_common::error::Result;

use crate::normalise::normalize;
use crate::scorer::{score, score_additive, score_maximax};
use crate::weights::{weight_sum, weights_sum_to_one};

/// Normalise and score under a single rule.
pub fn rank(
    alternatives: &[Alternative],
    features: &[Feature],
    rule: DecisionRule,
) -> Result<RankingResult> {
    let normalized = normalize(alternatives, features)?;
    score(rule, &normalized, features)
}

/// Run both rules over a dataset.
pub fn evaluate(dataset: &Dataset) -> Result<RankingReport> {
    let Dataset { features, alternatives } = dataset;

    if !weights_sum_to_one(features) {
        tracing::warn!(
            sum = weight_sum(features),
            "Feature weights do not sum to 1.0; additive scores use them as given"
        );
    }

    let normalized = normalize(alternatives, features)?;
    let additive = score_additive(&normalized, features)?;
    let maximax = score_maximax(&normalized)?;

    tracing::info!(
        alternatives = alternatives.len(),
        features = features.len(),
        additive_best = %additive.best_names.join(", "),
        maximax_best = %maximax.best_names.join(", "),
        "Ranking computed"
    );

    Ok(RankingReport { normalized, additive, maximax })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankwise_common::error::RankError;

    #[test]
    fn test_rank_matches_evaluate() {
        let ds = Dataset::preset();
        let report = evaluate(&ds).unwrap();
        for rule in DecisionRule::ALL {
            let single = rank(&ds.alternatives, &ds.features, rule).unwrap();
            assert_eq!(&single, report.result(rule));
        }
    }

    #[test]
    fn test_evaluate_empty_dataset() {
        let ds = Dataset { features: Dataset::preset().features, alternatives: vec![] };
        assert!(matches!(evaluate(&ds), Err(RankError::EmptyInput)));
    }
}
