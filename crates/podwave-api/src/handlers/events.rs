//! Analytics event handler

use axum::extract::State;
use podwave_service::dto::{AckResponse, LogEventRequest};
use podwave_service::EventService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// POST /api/events
pub async fn log_event(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LogEventRequest>,
) -> ApiResult<ApiJson<AckResponse>> {
    let service = EventService::new(state.service_context());
    service.log(request).await?;
    Ok(ApiJson(AckResponse {}))
}
