//! Route definitions
//!
//! The landing page at `/` and the JSON API mounted under `/api`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{catalog, events, favorites, health, landing, sessions, stats, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing::index))
        .nest("/api", api_routes())
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(session_routes())
        .merge(catalog_routes())
        .merge(stats_routes())
        .merge(health_routes())
}

/// User and favorite routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(users::register))
        .route("/users/:user_id/favorites", get(users::list_favorites))
        .route("/favorites/toggle", post(favorites::toggle_favorite))
}

/// Session and analytics routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/start", post(sessions::start_session))
        .route("/sessions/end", post(sessions::end_session))
        .route("/events", post(events::log_event))
}

/// Catalog routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/channels", get(catalog::list_channels))
        .route("/episodes", get(catalog::list_episodes))
}

fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(stats::leaderboard))
        .route("/stats", get(stats::stats))
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
