//! # podwave-service
//!
//! Application layer containing use cases, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CatalogService, EventService, FavoriteService, HealthService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SessionService, StatsService, UserService,
};
