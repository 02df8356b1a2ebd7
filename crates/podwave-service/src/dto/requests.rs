//! Request DTOs for API endpoints
//!
//! All body DTOs implement `Deserialize` and `Validate`. Field names follow
//! the mobile client's camelCase keys. Required fields are `Option` so that a
//! missing key reaches validation and gets the endpoint's own message instead
//! of a deserialization error.

use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use validator::{Validate, ValidationError};

/// Client-facing validation messages
pub mod messages {
    pub const REGISTER_REQUIRED: &str = "Nombre y DNI son obligatorios.";
    pub const USER_ID_REQUIRED: &str = "userId es obligatorio.";
    pub const SESSION_ID_REQUIRED: &str = "sessionId es obligatorio.";
    pub const EVENT_REQUIRED: &str = "sessionId y eventType obligatorios.";
    pub const FAVORITE_REQUIRED: &str = "userId y episodeId obligatorios.";
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn non_zero(value: i64) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::new("zero"));
    }
    Ok(())
}

// ============================================================================
// User Requests
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(
        required(message = "Nombre y DNI son obligatorios."),
        custom(function = "not_blank", message = "Nombre y DNI son obligatorios.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Nombre y DNI son obligatorios."),
        custom(function = "not_blank", message = "Nombre y DNI son obligatorios.")
    )]
    pub dni: Option<String>,
}

// ============================================================================
// Session Requests
// ============================================================================

/// Open a session for a user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    #[validate(
        required(message = "userId es obligatorio."),
        custom(function = "non_zero", message = "userId es obligatorio.")
    )]
    pub user_id: Option<i64>,
}

/// Close a session. Missing or null counters count as zero.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EndSessionRequest {
    #[validate(
        required(message = "sessionId es obligatorio."),
        custom(function = "non_zero", message = "sessionId es obligatorio.")
    )]
    pub session_id: Option<i64>,

    pub screens_visited: Option<i64>,
    pub plays_count: Option<i64>,
    pub favorites_count: Option<i64>,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Analytics event. `payload` may be any JSON value and is kept as the exact
/// text the client sent; absent means `{}`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LogEventRequest {
    #[validate(
        required(message = "sessionId y eventType obligatorios."),
        custom(function = "non_zero", message = "sessionId y eventType obligatorios.")
    )]
    pub session_id: Option<i64>,

    #[validate(
        required(message = "sessionId y eventType obligatorios."),
        custom(function = "not_blank", message = "sessionId y eventType obligatorios.")
    )]
    pub event_type: Option<String>,

    pub episode_id: Option<i64>,
    pub screen_name: Option<String>,

    #[serde(default, deserialize_with = "raw_payload")]
    pub payload: Option<Box<RawValue>>,
}

impl LogEventRequest {
    /// Raw payload text, `None` when the key was absent
    pub fn payload_json(&self) -> Option<&str> {
        self.payload.as_deref().map(RawValue::get)
    }
}

/// An explicit `null` is kept as the text `null`, not folded into `None`
fn raw_payload<'de, D>(deserializer: D) -> Result<Option<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Box::<RawValue>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Favorite Requests
// ============================================================================

/// Flip a user/episode favorite
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteRequest {
    #[validate(
        required(message = "userId y episodeId obligatorios."),
        custom(function = "non_zero", message = "userId y episodeId obligatorios.")
    )]
    pub user_id: Option<i64>,

    #[validate(
        required(message = "userId y episodeId obligatorios."),
        custom(function = "non_zero", message = "userId y episodeId obligatorios.")
    )]
    pub episode_id: Option<i64>,
}

// ============================================================================
// Catalog Queries
// ============================================================================

/// `GET /api/episodes` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpisodesQuery {
    pub mood: Option<String>,
}

impl EpisodesQuery {
    /// Mood filter to apply; an empty value means no filter
    pub fn mood_filter(&self) -> Option<&str> {
        self.mood.as_deref().filter(|m| !m.is_empty())
    }
}
