//! HTTP server initialization and runtime setup.
//!
//! Handles link store selection, engine wiring, and Axum server lifecycle.

use crate::application::services::RedirectResolver;
use crate::config::Config;
use crate::domain::stores::LinkStore;
use crate::infrastructure::access_log::TracingAccessLog;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (Redis, or in-memory fallback when unconfigured/unreachable)
/// - Redirect resolver with the configured rules
/// - Access log
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn LinkStore> = if let Some(redis_url) = &config.redis_url {
        match RedisStore::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Link store: Redis");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using MemoryStore.", e);
                Arc::new(MemoryStore::new())
            }
        }
    } else {
        tracing::info!("Link store: in-memory (REDIS_URL not set)");
        Arc::new(MemoryStore::new())
    };

    let resolver = Arc::new(RedirectResolver::new(store.clone(), config.rules.clone()));
    let access_log = Arc::new(TracingAccessLog::new());

    let state = AppState::new(resolver, store, access_log, config.home_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
