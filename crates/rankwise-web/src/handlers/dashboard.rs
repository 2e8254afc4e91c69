//! Dashboard handler — landing page showing the input dataset.

use axum::{extract::State, response::Html};
use minijinja::context;
use serde::Serialize;

use rankwise_common::Dataset;
use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct FeatureView {
    pub name: String,
    pub direction: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AlternativeRow {
    pub name: String,
    pub values: Vec<String>,
}

/// Table-ready view of the raw dataset. Values print as given.
#[derive(Debug, Serialize)]
pub struct DatasetView {
    pub features: Vec<FeatureView>,
    pub alternatives: Vec<AlternativeRow>,
}

impl From<&Dataset> for DatasetView {
    fn from(dataset: &Dataset) -> Self {
        Self {
            features: dataset
                .features
                .iter()
                .map(|f| FeatureView { name: f.name.clone(), direction: f.direction_label() })
                .collect(),
            alternatives: dataset
                .alternatives
                .iter()
                .map(|a| AlternativeRow {
                    name: a.name.clone(),
                    values: a.values.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        }
    }
}

/// GET / — dataset table and the calculate button
pub async fn dashboard(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let has_results = state.last_report.read().await.is_some();
    let html = state.templates.get_template("index.html")?.render(context! {
        dataset => DatasetView::from(&state.config.dataset),
        has_results => has_results,
    })?;
    Ok(Html(html))
}
