//! Session handlers

use axum::extract::State;
use podwave_service::dto::{AckResponse, EndSessionRequest, StartSessionRequest, StartSessionResponse};
use podwave_service::SessionService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Start a session
///
/// POST /api/sessions/start
pub async fn start_session(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<StartSessionRequest>,
) -> ApiResult<ApiJson<StartSessionResponse>> {
    let service = SessionService::new(state.service_context());
    let response = service.start(request).await?;
    Ok(ApiJson(response))
}

/// End a session
///
/// POST /api/sessions/end
pub async fn end_session(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EndSessionRequest>,
) -> ApiResult<ApiJson<AckResponse>> {
    let service = SessionService::new(state.service_context());
    service.end(request).await?;
    Ok(ApiJson(AckResponse {}))
}
