//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    dashboard::dashboard,
    ranker::{calculate, results_page, api_dataset, api_rank, api_rank_rule},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",          get(dashboard))
        .route("/calculate", post(calculate))
        .route("/results",   get(results_page))

        // API endpoints
        .route("/api/dataset",     get(api_dataset))
        .route("/api/rank",        get(api_rank))
        .route("/api/rank/{rule}", get(api_rank_rule))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
