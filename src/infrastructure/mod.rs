//! Infrastructure layer for external integrations.
//!
//! Implements the collaborator traits defined by the domain layer:
//!
//! - [`store`] - Link store backends (Redis and in-memory)
//! - [`access_log`] - Tracing-backed access log

pub mod access_log;
pub mod store;
