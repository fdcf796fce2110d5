//! Store trait for link record lookups.

use crate::domain::entities::LinkRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a link store.
///
/// The resolution engine treats any store error as "not found" (fail soft)
/// after logging it; this type exists for observability, not control flow.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store operation error: {0}")]
    Operation(String),
    #[error("malformed record under key {key}: {reason}")]
    MalformedRecord { key: String, reason: String },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value lookup capability consumed by the resolution engine.
///
/// Keys follow the `link:<slug>` scheme; callers build the full key so the
/// scheme stays compatible with records written by the link-management API.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed production store
/// - [`crate::infrastructure::store::MemoryStore`] - In-memory store for tests
///   and cache-less deployments
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Fetches the link record stored under `key`.
    ///
    /// `cache_ttl` is an advisory read-cache duration in seconds; backends
    /// without a read cache may ignore it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if a record exists under the key
    /// - `Ok(None)` if nothing is stored under the key
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failures. Callers must not treat
    /// errors as fatal: resolution degrades to "not found".
    async fn get(&self, key: &str, cache_ttl: Option<u64>) -> StoreResult<Option<LinkRecord>>;

    /// Checks whether the store backend is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
