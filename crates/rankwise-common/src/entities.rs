//! Core entity types for the decision-analysis pipeline.
//! Everything here is plain data: the ranker reads `Feature`/`Alternative`
//! and produces the derived types, recomputed on every run.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// A measured criterion with an optimisation direction and a weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    /// `true` when larger raw values are preferable.
    pub more_is_better: bool,
    /// Only used by the additive rule. Not required to sum to 1.
    pub weight: f64,
}

impl Feature {
    pub fn new(name: impl Into<String>, more_is_better: bool, weight: f64) -> Self {
        Self { name: name.into(), more_is_better, weight }
    }

    /// Short marker used in table headers.
    pub fn direction_label(&self) -> &'static str {
        if self.more_is_better { "↑ more is better" } else { "↓ less is better" }
    }
}

/// A candidate option. `values[i]` is its raw measurement for feature `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub values: Vec<f64>,
}

impl Alternative {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }
}

/// Features plus the alternatives measured against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub features: Vec<Feature>,
    pub alternatives: Vec<Alternative>,
}

impl Dataset {
    /// The built-in network traffic analysis preset.
    pub fn preset() -> Self {
        Self {
            features: vec![
                Feature::new("Accuracy", true, 0.4),
                Feature::new("Throughput (Gbit/s)", true, 0.3),
                Feature::new("Latency (ms)", false, 0.2),
                Feature::new("RAM usage (MB)", false, 0.1),
            ],
            alternatives: vec![
                Alternative::new("Deep packet analysis (DPA)", vec![0.96, 0.8, 90.0, 1200.0]),
                Alternative::new("Stream filtering (SF)", vec![0.88, 2.5, 40.0, 400.0]),
                Alternative::new("Hybrid method (HM)", vec![0.92, 1.2, 60.0, 700.0]),
                Alternative::new("Signature detector (SD)", vec![0.83, 3.0, 20.0, 250.0]),
            ],
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::preset()
    }
}

// ---------------------------------------------------------------------------
// Derived results
// ---------------------------------------------------------------------------

/// An alternative whose values have been rescaled into [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAlternative {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAlternative {
    pub name: String,
    pub score: f64,
}

/// Scores under one rule, in input order, plus the names tied for first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub scores: Vec<ScoredAlternative>,
    pub best_names: Vec<String>,
}

/// Aggregation rule applied to a normalized matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// Weighted sum of normalized values.
    Additive,
    /// Best single normalized value, weights ignored.
    Maximax,
}

impl DecisionRule {
    pub const ALL: [DecisionRule; 2] = [DecisionRule::Additive, DecisionRule::Maximax];

    pub fn label(&self) -> &'static str {
        match self {
            DecisionRule::Additive => "Additive convolution",
            DecisionRule::Maximax => "Maximax",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionRule::Additive => "additive",
            DecisionRule::Maximax => "maximax",
        }
    }
}

impl fmt::Display for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DecisionRule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "additive" => Ok(DecisionRule::Additive),
            "maximax" => Ok(DecisionRule::Maximax),
            other => Err(format!("unknown decision rule: {other}")),
        }
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub normalized: Vec<NormalizedAlternative>,
    pub additive: RankingResult,
    pub maximax: RankingResult,
}

impl RankingReport {
    pub fn result(&self, rule: DecisionRule) -> &RankingResult {
        match rule {
            DecisionRule::Additive => &self.additive,
            DecisionRule::Maximax => &self.maximax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_shape() {
        let ds = Dataset::preset();
        assert_eq!(ds.features.len(), 4);
        assert_eq!(ds.alternatives.len(), 4);
        for alt in &ds.alternatives {
            assert_eq!(alt.values.len(), ds.features.len(), "{} is misaligned", alt.name);
        }
    }

    #[test]
    fn test_decision_rule_parse() {
        assert_eq!("additive".parse::<DecisionRule>(), Ok(DecisionRule::Additive));
        assert_eq!("MAXIMAX".parse::<DecisionRule>(), Ok(DecisionRule::Maximax));
        assert!("topsis".parse::<DecisionRule>().is_err());
    }

    #[test]
    fn test_decision_rule_serializes_snake_case() {
        let json = serde_json::to_string(&DecisionRule::Maximax).unwrap();
        assert_eq!(json, "\"maximax\"");
    }
}
