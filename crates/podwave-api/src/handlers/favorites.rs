//! Favorite handlers

use axum::extract::State;
use podwave_service::dto::{ToggleFavoriteRequest, ToggleFavoriteResponse};
use podwave_service::FavoriteService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Toggle a favorite
///
/// POST /api/favorites/toggle
pub async fn toggle_favorite(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ToggleFavoriteRequest>,
) -> ApiResult<ApiJson<ToggleFavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.toggle(request).await?;
    Ok(ApiJson(response))
}
