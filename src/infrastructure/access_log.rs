//! Tracing-backed access log implementation.

use async_trait::async_trait;

use crate::domain::entities::{AccessRecord, LinkRecord};
use crate::domain::stores::AccessLog;

/// [`AccessLog`] implementation that emits a combined-log-style line via
/// `tracing`.
///
/// Infallible by construction; the best-effort contract still applies at the
/// call site for implementations that persist elsewhere.
pub struct TracingAccessLog;

impl TracingAccessLog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingAccessLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessLog for TracingAccessLog {
    async fn record(&self, access: &AccessRecord, link: &LinkRecord) -> Result<(), String> {
        tracing::info!(
            r#"{ip} - - "GET {path}" slug={slug} target={target} "{referer}" "{ua}""#,
            ip = access.ip.as_deref().unwrap_or("-"),
            path = access.path,
            slug = access.slug,
            target = link.url,
            referer = access.referer.as_deref().unwrap_or("-"),
            ua = access.user_agent.as_deref().unwrap_or("-"),
        );

        Ok(())
    }
}
