//! Event service
//!
//! Appends analytics events. Payloads are stored as opaque JSON text.

use podwave_core::entities::NewEvent;
use podwave_core::value_objects::RecordId;
use tracing::{info, instrument};

use crate::dto::requests::messages;
use crate::dto::LogEventRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record one event
    #[instrument(skip(self, request))]
    pub async fn log(&self, request: LogEventRequest) -> ServiceResult<()> {
        let session_id = request
            .session_id
            .filter(|id| *id != 0)
            .map(RecordId::new)
            .ok_or_else(|| ServiceError::validation(messages::EVENT_REQUIRED))?;
        let event_type = request
            .event_type
            .as_deref()
            .ok_or_else(|| ServiceError::validation(messages::EVENT_REQUIRED))?;

        let new_event = NewEvent::new(
            session_id,
            &event_type,
            request.episode_id.map(RecordId::new),
            request.screen_name.as_deref(),
            request.payload_json(),
        )
        .map_err(|e| {
            if e.is_validation() {
                ServiceError::validation(messages::EVENT_REQUIRED)
            } else {
                ServiceError::from(e)
            }
        })?;

        let event = self.ctx.event_repo().append(&new_event).await?;
        info!(event_id = %event.id, session_id = %session_id, event_type = %event.event_type, "Event logged");

        Ok(())
    }
}
