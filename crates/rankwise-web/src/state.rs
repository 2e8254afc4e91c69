//! Shared application state for the web server.

use std::sync::Arc;
use minijinja::Environment;
use tokio::sync::RwLock;

use rankwise_common::{DatasetConfig, RankingReport};

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: DatasetConfig,
    /// Result of the most recent "calculate" trigger, if any
    pub last_report: RwLock<Option<RankingReport>>,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(config: DatasetConfig) -> Result<Self, minijinja::Error> {
        Ok(Self {
            config,
            last_report: RwLock::new(None),
            templates: build_templates()?,
        })
    }
}

fn build_templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", include_str!("../templates/base.html"))?;
    env.add_template("dataset.html", include_str!("../templates/dataset.html"))?;
    env.add_template("index.html", include_str!("../templates/index.html"))?;
    env.add_template("results.html", include_str!("../templates/results.html"))?;
    Ok(env)
}

pub type SharedState = Arc<AppState>;
