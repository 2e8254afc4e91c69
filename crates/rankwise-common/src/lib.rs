//! rankwise-common — Shared types, errors, and configuration used across all rankwise crates.

pub mod error;
pub mod entities;
pub mod dataset_config;

// Re-export commonly used types
pub use dataset_config::{DatasetConfig, DisplayConfig, ServerConfig};
pub use entities::{
    Alternative, Dataset, DecisionRule, Feature, NormalizedAlternative, RankingReport,
    RankingResult, ScoredAlternative,
};
pub use error::{RankError, Result};
