//! Repository traits

mod repositories;

pub use repositories::{
    CatalogRepository, EventRepository, FavoriteRepository, RepoResult, SessionRepository,
    StatsRepository, UserRepository,
};
