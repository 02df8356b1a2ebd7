//! Catalog handlers

use axum::extract::State;
use podwave_service::dto::{ChannelsResponse, EpisodesQuery, EpisodesResponse};
use podwave_service::CatalogService;

use crate::extractors::QueryParams;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// GET /api/channels
pub async fn list_channels(State(state): State<AppState>) -> ApiResult<ApiJson<ChannelsResponse>> {
    let service = CatalogService::new(state.service_context());
    let response = service.list_channels().await?;
    Ok(ApiJson(response))
}

/// List episodes, optionally by mood
///
/// GET /api/episodes?mood=Focus
pub async fn list_episodes(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EpisodesQuery>,
) -> ApiResult<ApiJson<EpisodesResponse>> {
    let service = CatalogService::new(state.service_context());
    let response = service.list_episodes(&query).await?;
    Ok(ApiJson(response))
}
