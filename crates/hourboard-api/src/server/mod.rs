//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use hourboard_common::{AppConfig, AppError, IdentityTokenService, StoreBackend};
use hourboard_db::{
    create_pool, run_migrations, PgAdvisorRequestRepository, PgArchivalRunRepository,
    PgEventRepository, PgHistoricalEventRepository, PgStoreHealth, PgUserRepository, PoolConfig,
};
use hourboard_service::{ServiceContextBuilder, WorkflowSettings};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize the store and services and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let builder = match (&config.store.backend, &config.store.database) {
        (StoreBackend::Postgres, Some(database)) => {
            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(database))
                .await
                .map_err(|e| AppError::Store(e.to_string()))?;
            run_migrations(&pool, &database.migrations_dir)
                .await
                .map_err(|e| AppError::Store(e.to_string()))?;
            info!("PostgreSQL connection established");

            ServiceContextBuilder::new()
                .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
                .event_repo(Arc::new(PgEventRepository::new(pool.clone())))
                .request_repo(Arc::new(PgAdvisorRequestRepository::new(pool.clone())))
                .historical_repo(Arc::new(PgHistoricalEventRepository::new(pool.clone())))
                .archival_repo(Arc::new(PgArchivalRunRepository::new(pool.clone())))
                .store_health(Arc::new(PgStoreHealth::new(pool)))
        }
        (StoreBackend::Postgres, None) => {
            return Err(AppError::Config(
                "postgres backend requires DATABASE_URL".to_string(),
            ));
        }
        (StoreBackend::Memory, _) => {
            info!("Using the in-process document store");
            ServiceContextBuilder::in_memory()
        }
    };

    let identity_service = Arc::new(IdentityTokenService::new(
        &config.identity.secret,
        config.identity.leeway_secs,
    ));

    let service_context = builder
        .identity_service(identity_service)
        .settings(WorkflowSettings::from(&config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
