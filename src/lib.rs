//! # Redirector
//!
//! A slug redirect resolution service built with Axum and Redis.
//!
//! Resolves short identifiers ("slugs") in the request path into a final
//! redirect target, applying case-sensitivity fallback, two independent
//! link-expiration mechanisms, and a parameter-merging pipeline that combines
//! query-string parameters with an optional base64-encoded JSON payload
//! segment of the path.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and collaborator trait contracts
//! - **Application Layer** ([`application`]) - The resolution engine
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis/in-memory stores,
//!   access log
//! - **API Layer** ([`api`]) - Axum handlers and middleware
//!
//! ## Request Flow
//!
//! ```text
//! path parse → slug guard → store lookup (case fallback)
//!     → payload decode + query merge → expiry evaluation → redirect build
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at the Redis instance holding link records
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectResolver, Resolution};
    pub use crate::config::{Config, RedirectRules};
    pub use crate::domain::entities::{AccessRecord, LinkRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
