//! In-memory link store for tests and store-less deployments.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::LinkRecord;
use crate::domain::stores::{LinkStore, StoreResult};

/// A [`LinkStore`] backed by a process-local map.
///
/// Used by integration tests and as the startup fallback when Redis is not
/// configured or unreachable. Keys follow the same `link:<slug>` scheme as
/// the Redis store.
#[derive(Default)]
pub struct MemoryStore {
    links: RwLock<HashMap<String, LinkRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore link store");
        Self::default()
    }

    /// Inserts a record under a full store key (e.g. `link:promo`).
    pub fn insert(&self, key: impl Into<String>, link: LinkRecord) {
        self.links
            .write()
            .expect("memory store lock poisoned")
            .insert(key.into(), link);
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn get(&self, key: &str, _cache_ttl: Option<u64>) -> StoreResult<Option<LinkRecord>> {
        let links = self.links.read().expect("memory store lock poisoned");
        Ok(links.get(key).cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
