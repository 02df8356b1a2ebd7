//! User handlers
//!
//! Registration and a user's favorites.

use axum::extract::State;
use podwave_service::dto::{FavoritesResponse, RegisterUserRequest, RegisterUserResponse};
use podwave_service::{FavoriteService, UserService};

use crate::extractors::{RecordIdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Register a user
///
/// POST /api/users/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterUserRequest>,
) -> ApiResult<ApiJson<RegisterUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(ApiJson(response))
}

/// List a user's favorite episodes, newest first
///
/// GET /api/users/{user_id}/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    RecordIdPath(user_id): RecordIdPath,
) -> ApiResult<ApiJson<FavoritesResponse>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.list_for_user(user_id).await?;
    Ok(ApiJson(response))
}
