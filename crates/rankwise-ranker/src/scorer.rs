//! Aggregation of normalised rows into one score per alternative.
//!
//! Additive:  S(a) = Σ(w_i × n_i)
//! Maximax:   S(a) = max_i n_i
//!
//! Both keep input order. `find_best` then picks every alternative tied
//! for the top score.

use rankwise_common::entities::{
    DecisionRule, Feature, NormalizedAlternative, RankingResult, ScoredAlternative,
};
use rankwise_common::error::{RankError, Result};

/// Weighted-sum score for every alternative. Weights are used as given.
pub fn score_additive(
    normalized: &[NormalizedAlternative],
    features: &[Feature],
) -> Result<RankingResult> {
    if normalized.is_empty() {
        return Err(RankError::EmptyInput);
    }

    let scores = normalized
        .iter()
        .map(|alt| {
            if alt.values.len() != features.len() {
                return Err(RankError::DimensionMismatch {
                    alternative: alt.name.clone(),
                    expected: features.len(),
                    found: alt.values.len(),
                });
            }
            let score = alt
                .values
                .iter()
                .zip(features.iter())
                .map(|(n, f)| n * f.weight)
                .sum();
            Ok(ScoredAlternative { name: alt.name.clone(), score })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(into_ranking(scores))
}

/// Optimistic score: each alternative's single best normalised value.
/// Ignores weights entirely.
pub fn score_maximax(normalized: &[NormalizedAlternative]) -> Result<RankingResult> {
    if normalized.is_empty() {
        return Err(RankError::EmptyInput);
    }

    let scores = normalized
        .iter()
        .map(|alt| ScoredAlternative {
            name: alt.name.clone(),
            // no features scores 0, same as a fully degenerate row
            score: alt.values.iter().copied().reduce(f64::max).unwrap_or(0.0),
        })
        .collect();

    Ok(into_ranking(scores))
}

/// Score under the given rule.
pub fn score(
    rule: DecisionRule,
    normalized: &[NormalizedAlternative],
    features: &[Feature],
) -> Result<RankingResult> {
    match rule {
        DecisionRule::Additive => score_additive(normalized, features),
        DecisionRule::Maximax => score_maximax(normalized),
    }
}

/// Names of every alternative whose score equals the maximum.
///
/// Equality is exact: two scores that differ only by rounding error are
/// not a tie.
pub fn find_best(scores: &[ScoredAlternative]) -> Vec<String> {
    let Some(max_score) = scores.iter().map(|s| s.score).reduce(f64::max) else {
        return vec![];
    };

    scores
        .iter()
        .filter(|s| s.score == max_score)
        .map(|s| s.name.clone())
        .collect()
}

fn into_ranking(scores: Vec<ScoredAlternative>) -> RankingResult {
    let best_names = find_best(&scores);
    RankingResult { scores, best_names }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, values: &[f64]) -> NormalizedAlternative {
        NormalizedAlternative { name: name.to_string(), values: values.to_vec() }
    }

    fn scored(name: &str, score: f64) -> ScoredAlternative {
        ScoredAlternative { name: name.to_string(), score }
    }

    #[test]
    fn test_additive_uses_positional_weights() {
        let features = vec![Feature::new("a", true, 0.75), Feature::new("b", true, 0.25)];
        let rows = vec![row("x", &[1.0, 0.0]), row("y", &[0.0, 1.0])];
        let result = score_additive(&rows, &features).unwrap();
        assert_eq!(result.scores[0].score, 0.75);
        assert_eq!(result.scores[1].score, 0.25);
        assert_eq!(result.best_names, vec!["x".to_string()]);
    }

    #[test]
    fn test_additive_weights_not_renormalised() {
        let features = vec![Feature::new("a", true, 2.0), Feature::new("b", true, 3.0)];
        let rows = vec![row("x", &[1.0, 1.0])];
        let result = score_additive(&rows, &features).unwrap();
        assert_eq!(result.scores[0].score, 5.0);
    }

    #[test]
    fn test_additive_dimension_mismatch() {
        let features = vec![Feature::new("a", true, 1.0)];
        let rows = vec![row("x", &[1.0, 0.5])];
        assert!(matches!(
            score_additive(&rows, &features),
            Err(RankError::DimensionMismatch { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn test_maximax_ignores_weights() {
        let rows = vec![row("x", &[0.2, 0.9, 0.1]), row("y", &[0.5, 0.5, 0.5])];
        let result = score_maximax(&rows).unwrap();
        assert_eq!(result.scores[0].score, 0.9);
        assert_eq!(result.scores[1].score, 0.5);
        assert_eq!(result.best_names, vec!["x".to_string()]);
    }

    #[test]
    fn test_maximax_empty_row_scores_zero() {
        let result = score_maximax(&[row("x", &[])]).unwrap();
        assert_eq!(result.scores[0].score, 0.0);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(score_maximax(&[]), Err(RankError::EmptyInput)));
        assert!(matches!(score_additive(&[], &[]), Err(RankError::EmptyInput)));
    }

    #[test]
    fn test_find_best_single_winner() {
        let scores = vec![scored("a", 0.1), scored("b", 0.7), scored("c", 0.3)];
        assert_eq!(find_best(&scores), vec!["b".to_string()]);
    }

    #[test]
    fn test_find_best_all_ties_in_input_order() {
        let scores = vec![scored("c", 1.0), scored("a", 0.2), scored("b", 1.0), scored("d", 1.0)];
        assert_eq!(
            find_best(&scores),
            vec!["c".to_string(), "b".to_string(), "d".to_string()]
        );
    }

    #[test]
    fn test_find_best_exact_equality_only() {
        // 0.1 + 0.2 != 0.3 in binary floating point
        let scores = vec![scored("sum", 0.1 + 0.2), scored("lit", 0.3)];
        assert_eq!(find_best(&scores), vec!["sum".to_string()]);
    }

    #[test]
    fn test_find_best_empty() {
        assert!(find_best(&[]).is_empty());
    }

    #[test]
    fn test_score_dispatch() {
        let features = vec![Feature::new("a", true, 0.5), Feature::new("b", true, 0.5)];
        let rows = vec![row("x", &[1.0, 0.0])];
        assert_eq!(score(DecisionRule::Additive, &rows, &features).unwrap().scores[0].score, 0.5);
        assert_eq!(score(DecisionRule::Maximax, &rows, &features).unwrap().scores[0].score, 1.0);
    }
}
