//! Event entity - append-only analytics record tied to a session

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Stored payload when the client sends none
pub const EMPTY_PAYLOAD: &str = "{}";

/// Event entity
///
/// `payload_json` is opaque text. It is written once and never parsed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: RecordId,
    pub session_id: RecordId,
    pub event_type: String,
    pub episode_id: Option<RecordId>,
    pub screen_name: Option<String>,
    pub payload_json: String,
    pub created_at: DateTime<Utc>,
}

/// Normalized event data, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub session_id: RecordId,
    pub event_type: String,
    pub episode_id: Option<RecordId>,
    pub screen_name: Option<String>,
    pub payload_json: String,
}

impl NewEvent {
    /// Build an event from client input.
    ///
    /// The event type is trimmed and must be non-empty. A blank screen name
    /// becomes `None`. The payload is the raw JSON text exactly as the client
    /// sent it; `None` stores `{}`.
    pub fn new(
        session_id: RecordId,
        event_type: &str,
        episode_id: Option<RecordId>,
        screen_name: Option<&str>,
        payload_json: Option<&str>,
    ) -> Result<Self, DomainError> {
        let event_type = event_type.trim();
        if event_type.is_empty() {
            return Err(DomainError::EmptyField("event_type"));
        }

        let screen_name = screen_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let payload_json = payload_json.unwrap_or(EMPTY_PAYLOAD).to_string();

        Ok(Self {
            session_id,
            event_type: event_type.to_string(),
            episode_id,
            screen_name,
            payload_json,
        })
    }
}
