//! Session model -> entity mapper

use podwave_core::entities::Session;
use podwave_core::value_objects::RecordId;

use crate::models::SessionModel;

impl From<SessionModel> for Session {
    fn from(model: SessionModel) -> Self {
        Session {
            id: RecordId::new(model.id),
            user_id: RecordId::new(model.user_id),
            started_at: model.started_at,
            ended_at: model.ended_at,
            screens_visited: model.screens_visited.unwrap_or(0),
            plays_count: model.plays_count.unwrap_or(0),
            favorites_count: model.favorites_count.unwrap_or(0),
        }
    }
}
