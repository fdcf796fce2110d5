//! Per-request context captured for access logging.

/// Request context handed to the access log alongside the resolved link.
///
/// All fields come from the incoming request; missing headers stay `None`.
#[derive(Debug, Clone, Default)]
pub struct AccessRecord {
    pub slug: String,
    pub path: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl AccessRecord {
    pub fn new(
        slug: impl Into<String>,
        path: impl Into<String>,
        ip: Option<String>,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Self {
        Self {
            slug: slug.into(),
            path: path.into(),
            ip,
            user_agent: user_agent.map(str::to_owned),
            referer: referer.map(str::to_owned),
        }
    }
}
