//! Application builder — wires router + middleware + state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use droplink_auth::JwtVerifier;
use droplink_core::config::{AppConfig, CorsConfig};
use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_core::traits::{ObjectStore, OwnershipLedger, TokenVerifier};
use droplink_ledger::OwnershipRepository;
use droplink_storage::HttpObjectStore;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state).layer(build_cors_layer(cors_config))
}

/// Runs the Droplink server with the given configuration.
///
/// Constructs every collaborator once at startup and injects it through
/// `AppState`; the HTTP client and the ledger pool live for the process
/// lifetime.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting Droplink server...");

    let store: Arc<dyn ObjectStore> = Arc::new(HttpObjectStore::new(&config.storage)?);

    let pool = droplink_ledger::connection::create_pool(&config.ledger).await?;
    droplink_ledger::migration::run_migrations(&pool).await?;
    let ledger: Arc<dyn OwnershipLedger> = Arc::new(OwnershipRepository::new(pool));

    let verifier: Arc<dyn TokenVerifier> = Arc::new(JwtVerifier::new(&config.auth));

    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        ledger,
        verifier,
    };

    let app = build_app(state, &config.server.cors);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Droplink server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
