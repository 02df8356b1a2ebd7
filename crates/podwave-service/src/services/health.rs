//! Health service

use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Liveness: store name and current time, no database access
    pub fn health(&self) -> HealthResponse {
        HealthResponse::now(self.ctx.store_name())
    }

    /// Readiness: succeeds only if a pooled connection can be acquired
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let healthy = match self.ctx.pool().acquire().await {
            Ok(_conn) => true,
            Err(e) => {
                warn!(error = %e, "Database not reachable");
                false
            }
        };

        ReadinessResponse::from_check(healthy)
    }
}
