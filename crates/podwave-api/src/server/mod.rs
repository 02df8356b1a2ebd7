//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use axum::Router;
use podwave_common::{AppConfig, AppError, AppResult};
use podwave_db::{bootstrap, create_pool, store_name};
use podwave_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Open the database, apply the schema, seed the catalog and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let store = store_name(&config.database.url);
    info!(store = %store, "Opening SQLite database...");

    let db_config = podwave_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let seeded = bootstrap(&pool, config.seed.on_startup)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    if seeded {
        info!("Catalog seeded");
    }
    info!("Database ready");

    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .store_name(store)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener until Ctrl+C
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
