//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check: link store reachability
//! - everything else - Redirect resolution (fallback handler; the raw path
//!   shape carries the slug and optional payload segment, so no path
//!   normalization is applied)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .fallback(get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
