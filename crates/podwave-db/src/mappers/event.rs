//! Event model -> entity mapper

use podwave_core::entities::{Event, EMPTY_PAYLOAD};
use podwave_core::value_objects::RecordId;

use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: RecordId::new(model.id),
            session_id: RecordId::new(model.session_id),
            event_type: model.event_type,
            episode_id: model.episode_id.map(RecordId::new),
            screen_name: model.screen_name,
            payload_json: model
                .payload_json
                .unwrap_or_else(|| EMPTY_PAYLOAD.to_string()),
            created_at: model.created_at,
        }
    }
}
