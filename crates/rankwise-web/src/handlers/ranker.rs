//! Ranking handlers — run the pipeline on demand and render its results.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use minijinja::context;
use serde::Serialize;

use rankwise_common::{DecisionRule, DisplayConfig, RankingReport};
use rankwise_ranker::evaluate;
use crate::error::ApiError;
use crate::handlers::dashboard::DatasetView;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct ScoreRow {
    pub name: String,
    pub score: String,
}

/// One results block: score table plus the best-alternative line.
#[derive(Debug, Serialize)]
pub struct RuleView {
    pub rule: &'static str,
    pub title: &'static str,
    pub rows: Vec<ScoreRow>,
    pub best: String,
}

fn rule_views(report: &RankingReport, display: &DisplayConfig) -> Vec<RuleView> {
    DecisionRule::ALL
        .iter()
        .map(|&rule| {
            let result = report.result(rule);
            RuleView {
                rule: rule.as_str(),
                title: rule.label(),
                rows: result
                    .scores
                    .iter()
                    .map(|s| ScoreRow { name: s.name.clone(), score: display.format_score(s.score) })
                    .collect(),
                best: result.best_names.join(", "),
            }
        })
        .collect()
}

/// POST /calculate — compute both rankings and keep the report for /results
pub async fn calculate(State(state): State<SharedState>) -> Result<Redirect, ApiError> {
    let report = evaluate(&state.config.dataset)?;
    *state.last_report.write().await = Some(report);
    Ok(Redirect::to("/results"))
}

/// GET /results — render the last computed report
pub async fn results_page(State(state): State<SharedState>) -> Result<Response, ApiError> {
    let guard = state.last_report.read().await;
    let Some(report) = guard.as_ref() else {
        return Ok(Redirect::to("/").into_response());
    };

    let html = state.templates.get_template("results.html")?.render(context! {
        dataset => DatasetView::from(&state.config.dataset),
        rules => rule_views(report, &state.config.display),
    })?;
    Ok(Html(html).into_response())
}

/// GET /api/dataset — the configured dataset
pub async fn api_dataset(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.config.dataset.clone())
}

/// GET /api/rank — full report under both rules
pub async fn api_rank(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let report = evaluate(&state.config.dataset)?;
    Ok(Json(report))
}

/// GET /api/rank/{rule} — ranking under a single rule
pub async fn api_rank_rule(
    State(state): State<SharedState>,
    Path(rule): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rule: DecisionRule = rule.parse().map_err(ApiError::NotFound)?;
    let dataset = &state.config.dataset;
    let result = rankwise_ranker::rank(&dataset.alternatives, &dataset.features, rule)?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankwise_common::Dataset;

    #[test]
    fn test_rule_views_format_two_decimals() {
        let report = evaluate(&Dataset::preset()).unwrap();
        let views = rule_views(&report, &DisplayConfig::default());
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].rule, "additive");
        assert_eq!(views[0].rows[0].score, "0.40");
        assert_eq!(views[1].rows[0].score, "1.00");
        assert_eq!(
            views[1].best,
            "Deep packet analysis (DPA), Signature detector (SD)"
        );
    }
}
