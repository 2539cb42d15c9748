use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::projects::core::aggregation::{self, DEFAULT_RECENT_N, DEFAULT_TOP_N};
use crate::modules::projects::core::record::ProjectRecord;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DashboardParams {
    pub top_n: Option<usize>,
    pub recent_n: Option<usize>,
}

#[derive(Deserialize)]
pub struct RankingParams {
    pub n: Option<usize>,
}

// Runs `view` over a snapshot of the store.
async fn with_records<F, T>(state: &AppState, view: F) -> Response
where
    F: FnOnce(&[ProjectRecord]) -> T,
    T: Serialize,
{
    match state.dashboard_handler.records().await {
        Ok(records) => Json(view(&records)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> impl IntoResponse {
    match state
        .dashboard_handler
        .dashboard(
            params.top_n.unwrap_or(DEFAULT_TOP_N),
            params.recent_n.unwrap_or(DEFAULT_RECENT_N),
        )
        .await
    {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn summary(State(state): State<AppState>) -> impl IntoResponse {
    with_records(&state, aggregation::summarize).await
}

pub async fn monthly_series(State(state): State<AppState>) -> impl IntoResponse {
    with_records(&state, aggregation::monthly_series).await
}

pub async fn category_breakdown(State(state): State<AppState>) -> impl IntoResponse {
    with_records(&state, aggregation::category_breakdown).await
}

pub async fn top_categories(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let n = params.n.unwrap_or(DEFAULT_TOP_N);
    with_records(&state, |records| aggregation::top_n_categories(records, n)).await
}

pub async fn top_projects(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let n = params.n.unwrap_or(DEFAULT_TOP_N);
    with_records(&state, |records| {
        aggregation::top_n_projects(records, n)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    })
    .await
}

pub async fn recent_projects(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let n = params.n.unwrap_or(DEFAULT_RECENT_N);
    with_records(&state, |records| {
        aggregation::most_recent(records, n)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    })
    .await
}

pub async fn projects(State(state): State<AppState>) -> impl IntoResponse {
    with_records(&state, |records| records.to_vec()).await
}
