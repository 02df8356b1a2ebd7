//! User service
//!
//! Handles registration.

use podwave_core::entities::NewUser;
use tracing::{info, instrument};

use crate::dto::requests::messages;
use crate::dto::{RegisterUserRequest, RegisterUserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a user. The DNI is stored uppercased; duplicates are allowed.
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterUserRequest) -> ServiceResult<RegisterUserResponse> {
        let (Some(name), Some(dni)) = (request.name, request.dni) else {
            return Err(ServiceError::validation(messages::REGISTER_REQUIRED));
        };
        let new_user = NewUser::new(&name, &dni)
            .map_err(|_| ServiceError::validation(messages::REGISTER_REQUIRED))?;

        let user = self.ctx.user_repo().create(&new_user).await?;
        info!(user_id = %user.id, "User registered");

        Ok(RegisterUserResponse::from(user))
    }
}
