//! Access log trait for recording resolved redirects.

use crate::domain::entities::{AccessRecord, LinkRecord};
use async_trait::async_trait;

/// Best-effort access logging consumed by the redirect handler.
///
/// Recording is fire-and-forget relative to the redirect decision: a failed
/// write must never alter or delay the outcome. Callers log failures at warn
/// level and continue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLog: Send + Sync {
    /// Records a hit on a resolved link.
    ///
    /// # Errors
    ///
    /// Returns a string describing the write failure. Errors are advisory
    /// only; callers swallow them after logging.
    async fn record(&self, access: &AccessRecord, link: &LinkRecord) -> Result<(), String>;
}
