//! Session service
//!
//! Opens and closes app usage sessions.

use podwave_core::entities::SessionSummary;
use podwave_core::value_objects::RecordId;
use tracing::{debug, info, instrument};

use crate::dto::requests::messages;
use crate::dto::{EndSessionRequest, StartSessionRequest, StartSessionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Session service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start a session. The user id is not checked against stored users.
    #[instrument(skip(self))]
    pub async fn start(&self, request: StartSessionRequest) -> ServiceResult<StartSessionResponse> {
        let user_id = request
            .user_id
            .filter(|id| *id != 0)
            .map(RecordId::new)
            .ok_or_else(|| ServiceError::validation(messages::USER_ID_REQUIRED))?;

        let session = self.ctx.session_repo().start(user_id).await?;
        info!(session_id = %session.id, user_id = %user_id, "Session started");

        Ok(StartSessionResponse {
            session_id: session.id.into_inner(),
        })
    }

    /// End a session, overwriting its counters. Unknown ids succeed silently.
    #[instrument(skip(self))]
    pub async fn end(&self, request: EndSessionRequest) -> ServiceResult<()> {
        let session_id = request
            .session_id
            .filter(|id| *id != 0)
            .map(RecordId::new)
            .ok_or_else(|| ServiceError::validation(messages::SESSION_ID_REQUIRED))?;

        let summary = SessionSummary::new(
            request.screens_visited.unwrap_or(0),
            request.plays_count.unwrap_or(0),
            request.favorites_count.unwrap_or(0),
        );

        if self.ctx.session_repo().end(session_id, summary).await? {
            info!(session_id = %session_id, plays = summary.plays_count, "Session ended");
        } else {
            debug!(session_id = %session_id, "End requested for unknown session");
        }

        Ok(())
    }
}
