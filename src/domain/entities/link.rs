//! Link record entity representing a stored slug-to-URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored link record resolved from the key-value store.
///
/// Records are written by the external link-management API as JSON with
/// camelCase field names; the serde renames keep this engine wire-compatible
/// with existing data. From this engine's perspective records are read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// Canonical redirect target.
    pub url: String,
    /// Absolute expiry as epoch seconds, if the link expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
    /// Fallback target used when the link is judged expired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_redirect_url: Option<String>,
}

impl LinkRecord {
    /// Creates a record with no expiry metadata.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            expiration: None,
            expiry_redirect_url: None,
        }
    }

    /// Returns true if the stored absolute expiry has passed at `now`.
    ///
    /// Expiry is strict: a link is valid up to and including its expiration
    /// second.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|exp| now.timestamp() > exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_without_expiration_never_expires() {
        let link = LinkRecord::new("https://example.com");
        assert!(!link.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_record_expired_when_now_past_expiration() {
        let mut link = LinkRecord::new("https://example.com");
        link.expiration = Some(1_000);

        let now = Utc.timestamp_opt(1_001, 0).unwrap();
        assert!(link.is_expired_at(now));
    }

    #[test]
    fn test_record_valid_at_exact_expiration_second() {
        let mut link = LinkRecord::new("https://example.com");
        link.expiration = Some(1_000);

        let now = Utc.timestamp_opt(1_000, 0).unwrap();
        assert!(!link.is_expired_at(now));
    }

    #[test]
    fn test_deserializes_camel_case_wire_format() {
        let json = r#"{
            "url": "https://example.com",
            "expiration": 1700000000,
            "expiryRedirectUrl": "https://fallback.example"
        }"#;

        let link: LinkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.expiration, Some(1_700_000_000));
        assert_eq!(
            link.expiry_redirect_url.as_deref(),
            Some("https://fallback.example")
        );
    }

    #[test]
    fn test_deserializes_minimal_record() {
        let link: LinkRecord = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        assert!(link.expiration.is_none());
        assert!(link.expiry_redirect_url.is_none());
    }
}
