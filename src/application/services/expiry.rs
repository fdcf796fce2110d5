//! Link expiration evaluation.
//!
//! Two independent mechanisms can expire a link:
//!
//! 1. **Stored absolute expiry** - the record's `expiration` epoch timestamp.
//! 2. **Caller-supplied date token** - a date value read from the merged
//!    parameter map under the configured token parameter, acting as a cutoff
//!    date for the request itself.
//!
//! The stored expiry is evaluated first and short-circuits the token check
//! when it fires. Token parsing fails closed: an unparsable token yields
//! [`ExpiryOutcome::InvalidToken`], never a valid redirect.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::{Map, Value};

use crate::domain::entities::LinkRecord;

/// Outcome of evaluating both expiry mechanisms for a resolved link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryOutcome {
    /// Neither mechanism fired; proceed to the link's canonical URL.
    Valid,
    /// Expired, and the record names a fallback target to redirect to.
    ExpiredWithFallback(String),
    /// Expired with no fallback target; surfaced as 410 Gone.
    ExpiredNoFallback,
    /// Token parameter present but unparsable; surfaced as 410 with a
    /// distinct "invalid" message.
    InvalidToken,
}

/// Evaluates both expiry mechanisms against the merged parameter map.
///
/// `token_param` names the parameter carrying the date token. `date_only`
/// controls the token comparison: when true the time component is ignored
/// and the link expires once the current *date* passes the token date; when
/// false full instants are compared (a bare `YYYY-MM-DD` token means
/// midnight UTC).
pub fn evaluate(
    link: &LinkRecord,
    params: &Map<String, Value>,
    now: DateTime<Utc>,
    token_param: &str,
    date_only: bool,
) -> ExpiryOutcome {
    // Stored absolute expiry first; short-circuits the token check.
    if link.is_expired_at(now) {
        return expired_outcome(link);
    }

    let Some(value) = params.get(token_param) else {
        return ExpiryOutcome::Valid;
    };

    let Some(cutoff) = value.as_str().and_then(parse_token_date) else {
        return ExpiryOutcome::InvalidToken;
    };

    let expired = if date_only {
        now.date_naive() > cutoff.date_naive()
    } else {
        now > cutoff
    };

    if expired {
        expired_outcome(link)
    } else {
        ExpiryOutcome::Valid
    }
}

fn expired_outcome(link: &LinkRecord) -> ExpiryOutcome {
    match &link.expiry_redirect_url {
        Some(url) => ExpiryOutcome::ExpiredWithFallback(url.clone()),
        None => ExpiryOutcome::ExpiredNoFallback,
    }
}

/// Parses a date token into a UTC instant.
///
/// Accepted forms, tried in order:
/// 1. plain calendar date (`YYYY-MM-DD`), interpreted as midnight UTC
/// 2. RFC 3339 timestamp
/// 3. the historical form: a base64-encoded string wrapping either of the
///    above
fn parse_token_date(token: &str) -> Option<DateTime<Utc>> {
    if let Some(instant) = parse_date_str(token) {
        return Some(instant);
    }

    let decoded = STANDARD.decode(token).ok()?;
    let inner = String::from_utf8(decoded).ok()?;
    parse_date_str(inner.trim())
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
