//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use podwave_service::dto::HealthResponse;
use podwave_service::HealthService;
use serde_json::json;

use crate::response::ApiJson;
use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> ApiJson<HealthResponse> {
    ApiJson(HealthService::new(state.service_context()).health())
}

/// Readiness check with database connectivity
///
/// GET /api/health/ready
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let report = HealthService::new(state.service_context()).readiness().await;

    if report.ready {
        ApiJson(report).into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"ok": false, "database": report.database})),
        )
            .into_response()
    }
}
