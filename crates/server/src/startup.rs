use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, StoreBackend, StoreConfig};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::storage::{MemoryStore, RedisStore, SharedStore};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad listen address: {e}")))
}

/// Open the configured backend. Redis is connected eagerly so a bad URL
/// fails startup instead of the first request.
pub async fn build_store(cfg: &StoreConfig) -> Result<SharedStore, StartupError> {
    match cfg.backend {
        StoreBackend::Redis => {
            let store = RedisStore::connect(&cfg.url)
                .await
                .map_err(|e| StartupError::Store(e.to_string()))?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!(event = "store_memory", "using in-process memory store; data is not persisted");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Router over an already-opened store, as served by [`run`].
pub fn build_app(store: SharedStore) -> Router {
    routes::build_router(ServerState::new(store), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: load config, open the store, serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = load_config()?;
    let store = build_store(&cfg.store).await?;
    let app = build_app(store);

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.store.backend, "starting bites server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
