use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    /// No alternatives were supplied, so min/max of a feature is undefined.
    #[error("Empty input: at least one alternative is required")]
    EmptyInput,

    #[error("Dimension mismatch for '{alternative}': expected {expected} values, found {found}")]
    DimensionMismatch {
        alternative: String,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for RankError {
    fn from(e: toml::de::Error) -> Self {
        RankError::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for RankError {
    fn from(e: serde_yaml::Error) -> Self {
        RankError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
