//! Dataset and server configuration.
//!
//! The ranker never reads configuration itself; callers load a
//! `DatasetConfig` and hand its `dataset` to the pipeline. Without a config
//! file the built-in preset is used.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::entities::{Alternative, Dataset, Feature};
use crate::error::{RankError, Result};

/// Env var naming the config file to load.
pub const CONFIG_ENV: &str = "RANKWISE_CONFIG";
/// Fallback config path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "rankwise.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Features and alternatives to rank
    #[serde(default)]
    pub dataset: Dataset,

    /// HTTP listener options
    #[serde(default)]
    pub server: ServerConfig,

    /// Presentation options
    #[serde(default)]
    pub display: DisplayConfig,
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places used when rendering scores. The core keeps full precision.
    #[serde(default = "default_precision")]
    pub score_precision: usize,
}

fn default_precision() -> usize { 2 }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { score_precision: default_precision() }
    }
}

impl DisplayConfig {
    pub fn format_score(&self, score: f64) -> String {
        format!("{:.*}", self.score_precision, score)
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl DatasetConfig {
    /// Load from `$RANKWISE_CONFIG` or `rankwise.toml`, falling back to the
    /// preset when no file exists.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&path).exists() {
            tracing::info!("No config at {}, using built-in preset dataset", path);
            return Ok(Self::default());
        }

        let config = Self::from_path(&path)?;
        tracing::info!(
            "Loaded {} features and {} alternatives from {}",
            config.dataset.features.len(),
            config.dataset.alternatives.len(),
            path
        );
        Ok(config)
    }

    /// Load by file extension: `.yaml`/`.yml`, `.json`, anything else as TOML.
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(path),
            Some("json") => Self::from_json(path),
            _ => Self::from_toml(path),
        }
    }

    pub fn from_toml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject datasets the pipeline cannot rank.
    pub fn validate(&self) -> Result<()> {
        validate_dataset(&self.dataset)
    }
}

/// Shape and value checks run when a dataset is loaded.
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    if dataset.alternatives.is_empty() {
        return Err(RankError::Config("dataset has no alternatives".to_string()));
    }
    if dataset.features.is_empty() {
        return Err(RankError::Config("dataset has no features".to_string()));
    }

    for Feature { name, weight, .. } in &dataset.features {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(RankError::Config(format!(
                "feature '{name}' has invalid weight {weight}"
            )));
        }
    }

    for Alternative { name, values } in &dataset.alternatives {
        if values.len() != dataset.features.len() {
            return Err(RankError::DimensionMismatch {
                alternative: name.clone(),
                expected: dataset.features.len(),
                found: values.len(),
            });
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite()) {
            return Err(RankError::Config(format!(
                "alternative '{name}' has non-finite value {v}"
            )));
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = DatasetConfig::default();
        assert_eq!(config.dataset, Dataset::preset());
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.display.score_precision, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_score_two_decimals() {
        let display = DisplayConfig::default();
        assert_eq!(display.format_score(0.612_732), "0.61");
        assert_eq!(display.format_score(1.0), "1.00");
    }

    #[test]
    fn test_parse_toml_dataset() {
        let toml = r#"
            [server]
            port = 8080

            [[dataset.features]]
            name = "Cost"
            more_is_better = false
            weight = 1.0

            [[dataset.alternatives]]
            name = "A"
            values = [10.0]

            [[dataset.alternatives]]
            name = "B"
            values = [20.0]
        "#;
        let config = DatasetConfig::parse_toml(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dataset.alternatives.len(), 2);
        assert!(!config.dataset.features[0].more_is_better);
    }

    #[test]
    fn test_example_config_matches_preset() {
        let content = include_str!("../../../rankwise.example.toml");
        let config = DatasetConfig::parse_toml(content).unwrap();
        assert_eq!(config.dataset, Dataset::preset());
    }

    #[test]
    fn test_from_path_dispatches_on_extension() {
        let dir = std::env::temp_dir();
        let json_path = dir.join("rankwise_config_test.json");
        let json = serde_json::to_string(&DatasetConfig::default()).unwrap();
        std::fs::write(&json_path, json).unwrap();

        let config = DatasetConfig::from_path(json_path.to_str().unwrap()).unwrap();
        assert_eq!(config.dataset, Dataset::preset());
        std::fs::remove_file(&json_path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DatasetConfig::from_toml("/nonexistent/rankwise.toml").unwrap_err();
        assert!(matches!(err, RankError::Io(_)));
    }

    #[test]
    fn test_missing_dataset_section_uses_preset() {
        let config = DatasetConfig::parse_toml("[display]\nscore_precision = 3\n").unwrap();
        assert_eq!(config.dataset, Dataset::preset());
        assert_eq!(config.display.score_precision, 3);
    }

    #[test]
    fn test_validate_rejects_dimension_mismatch() {
        let mut ds = Dataset::preset();
        ds.alternatives[1].values.pop();
        match validate_dataset(&ds) {
            Err(RankError::DimensionMismatch { expected, found, .. }) => {
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let mut ds = Dataset::preset();
        ds.features[0].weight = -0.1;
        assert!(matches!(validate_dataset(&ds), Err(RankError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_alternatives() {
        let mut ds = Dataset::preset();
        ds.alternatives.clear();
        assert!(matches!(validate_dataset(&ds), Err(RankError::Config(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DatasetConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: DatasetConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.dataset, parsed.dataset);
    }
}
