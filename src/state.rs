use std::sync::Arc;

use crate::application::services::RedirectResolver;
use crate::domain::stores::{AccessLog, LinkStore};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RedirectResolver>,
    pub store: Arc<dyn LinkStore>,
    pub access_log: Arc<dyn AccessLog>,
    /// Redirect target for the root path, when configured.
    pub home_url: Option<String>,
}

impl AppState {
    pub fn new(
        resolver: Arc<RedirectResolver>,
        store: Arc<dyn LinkStore>,
        access_log: Arc<dyn AccessLog>,
        home_url: Option<String>,
    ) -> Self {
        Self {
            resolver,
            store,
            access_log,
            home_url,
        }
    }
}
