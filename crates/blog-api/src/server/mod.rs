//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use blog_common::{AppConfig, AppError, StorageConfig};
use blog_core::IdGenerator;
use blog_db::{create_pool, run_migrations, PgBlogRepository, PgEntryRepository, PoolConfig};
use blog_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_rate_limit(create_router(), &config.rate_limit).merge(health_routes());
    let router = apply_middleware(router, config);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let id_generator = Arc::new(
        IdGenerator::new(config.ids.worker_id).map_err(|e| AppError::Config(e.to_string()))?,
    );

    let service_context = match &config.storage {
        StorageConfig::Postgres(db) => {
            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(db))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if db.run_migrations {
                run_migrations(&pool, &db.migrations_dir)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }

            ServiceContextBuilder::new()
                .pool(pool.clone())
                .blog_repo(Arc::new(PgBlogRepository::new(pool.clone())))
                .entry_repo(Arc::new(PgEntryRepository::new(pool)))
                .id_generator(id_generator)
                .build()
                .map_err(|e| AppError::Config(e.to_string()))?
        }
        StorageConfig::Memory => {
            info!("Using in-memory storage; data is lost on restart");
            ServiceContext::in_memory(id_generator)
        }
    };

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
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
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}
