//! Trait contracts for the engine's external collaborators.
//!
//! The resolution engine consumes two capabilities, both defined here as
//! traits and implemented in `crate::infrastructure`:
//!
//! - [`LinkStore`] - Key-value lookup of link records (`link:<slug>` keys)
//! - [`AccessLog`] - Best-effort hit recording
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod access_log;
pub mod link_store;

pub use access_log::AccessLog;
pub use link_store::{LinkStore, StoreError, StoreResult};

#[cfg(test)]
pub use access_log::MockAccessLog;
#[cfg(test)]
pub use link_store::MockLinkStore;
