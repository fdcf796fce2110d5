//! Link store implementations.
//!
//! Two implementations of [`crate::domain::stores::LinkStore`]:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-memory store for tests and Redis-less deployments

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
