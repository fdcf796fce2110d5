#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use redirector::application::services::RedirectResolver;
use redirector::config::RedirectRules;
use redirector::domain::entities::LinkRecord;
use redirector::infrastructure::access_log::TracingAccessLog;
use redirector::infrastructure::store::MemoryStore;
use redirector::routes::app_router;
use redirector::state::AppState;

/// Builds a test server over an in-memory store.
pub fn create_test_server(
    store: MemoryStore,
    rules: RedirectRules,
    home_url: Option<String>,
) -> TestServer {
    let store = Arc::new(store);
    let resolver = Arc::new(RedirectResolver::new(store.clone(), rules));
    let access_log = Arc::new(TracingAccessLog::new());

    let state = AppState::new(resolver, store, access_log, home_url);

    TestServer::new(app_router(state)).unwrap()
}

/// Test server with default rules and no home URL.
pub fn default_server(store: MemoryStore) -> TestServer {
    create_test_server(store, RedirectRules::default(), None)
}

pub fn insert_link(store: &MemoryStore, slug: &str, url: &str) {
    store.insert(format!("link:{}", slug), LinkRecord::new(url));
}

pub fn insert_expired_link(store: &MemoryStore, slug: &str, url: &str, fallback: Option<&str>) {
    let mut link = LinkRecord::new(url);
    link.expiration = Some(chrono::Utc::now().timestamp() - 3600);
    link.expiry_redirect_url = fallback.map(str::to_owned);
    store.insert(format!("link:{}", slug), link);
}
