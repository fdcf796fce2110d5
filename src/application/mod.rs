//! Application layer implementing the redirect resolution engine.
//!
//! This layer orchestrates domain operations: it consumes the store and
//! access-log traits from [`crate::domain::stores`] and provides a clean API
//! for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::resolver::RedirectResolver`] - Slug resolution, parameter
//!   merging, and redirect target assembly
//! - [`services::expiry`] - Link expiration evaluation

pub mod services;
