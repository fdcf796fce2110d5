//! Redis-backed link store implementation.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::LinkRecord;
use crate::domain::stores::{LinkStore, StoreError, StoreResult};

/// Redis implementation of [`LinkStore`].
///
/// Records are stored as JSON strings under `link:<slug>` keys by the
/// external link-management API; this store only reads them. Uses
/// `ConnectionManager` for connection reuse and reconnection.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis link store");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl LinkStore for RedisStore {
    async fn get(&self, key: &str, _cache_ttl: Option<u64>) -> StoreResult<Option<LinkRecord>> {
        // The TTL hint targets edge read caches; Redis is the source of
        // truth here, so the hint is ignored.
        let mut conn = self.client.clone();

        let raw: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| StoreError::Operation(format!("GET {}: {}", key, e)))?;

        let Some(raw) = raw else {
            debug!(key, "store MISS");
            return Ok(None);
        };

        let link = serde_json::from_str::<LinkRecord>(&raw).map_err(|e| {
            StoreError::MalformedRecord {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;

        debug!(key, url = %link.url, "store HIT");
        Ok(Some(link))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
