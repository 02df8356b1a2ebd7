//! Leaderboard and stats handlers

use axum::extract::State;
use podwave_service::dto::{LeaderboardResponse, StatsResponse};
use podwave_service::StatsService;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// GET /api/leaderboard
pub async fn leaderboard(State(state): State<AppState>) -> ApiResult<ApiJson<LeaderboardResponse>> {
    let service = StatsService::new(state.service_context());
    let response = service.leaderboard().await?;
    Ok(ApiJson(response))
}

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> ApiResult<ApiJson<StatsResponse>> {
    let service = StatsService::new(state.service_context());
    let response = service.totals().await?;
    Ok(ApiJson(response))
}
