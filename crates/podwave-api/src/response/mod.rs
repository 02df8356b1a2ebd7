//! Response types and error handling for API endpoints
//!
//! Every JSON body carries an `ok` flag: successes are `{ok: true, ...}`
//! and failures are `{ok: false, error}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use podwave_common::ErrorResponse;
use podwave_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Body of every 400 caused by an unreadable request body
pub const INVALID_JSON_MESSAGE: &str = "El cuerpo de la petición debe ser JSON válido.";

/// Body of every 5xx; details go to the log only
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor.";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::Service(e) => e.status_code(),
            Self::Validation(_)
            | Self::InvalidJson(_)
            | Self::InvalidPath(_)
            | Self::InvalidQuery(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
        }
    }

    /// Message shown to the client in the `error` field
    #[must_use]
    pub fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }

        match self {
            Self::Validation(errors) => first_validation_message(errors)
                .unwrap_or_else(|| INVALID_JSON_MESSAGE.to_string()),
            Self::InvalidJson(_) => INVALID_JSON_MESSAGE.to_string(),
            Self::Service(ServiceError::Validation(msg))
            | Self::InvalidPath(msg)
            | Self::InvalidQuery(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Create an invalid path parameter error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}

/// All fields of a request share one message, so any field's will do
fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(ToString::to_string))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        } else {
            tracing::debug!(error = %self, code = self.error_code(), "Request rejected");
        }

        (status, Json(ErrorResponse::new(self.client_message()))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
struct Envelope<'a, T> {
    ok: bool,
    #[serde(flatten)]
    body: &'a T,
}

/// Successful JSON response: `T`'s fields flattened next to `ok: true`
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        Json(Envelope {
            ok: true,
            body: &self.0,
        })
        .into_response()
    }
}
