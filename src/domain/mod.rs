//! Domain layer containing entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::LinkRecord`],
//!   [`entities::AccessRecord`])
//! - [`stores`] - Trait contracts for the external key-value store and
//!   access log, implemented by [`crate::infrastructure`]
//!
//! The domain layer has no dependency on infrastructure or the HTTP surface;
//! resolution logic lives in [`crate::application::services`].

pub mod entities;
pub mod stores;
