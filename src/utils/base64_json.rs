//! Base64-encoded JSON payload decoding and parameter merging.
//!
//! A redirect path may carry a second segment holding base64-encoded JSON
//! parameters authored alongside the link. Decoding fails soft: a malformed
//! segment must never block an otherwise valid redirect.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

/// Decodes a base64 path segment into a JSON parameter map.
///
/// Uses standard (non URL-safe) base64, matching how payload segments are
/// authored. Returns `None` on any failure: invalid base64, invalid UTF-8,
/// invalid JSON, or JSON that is not an object. Scalar or array JSON merges
/// nothing, so it is treated the same as no payload.
pub fn decode_base64_json(segment: &str) -> Option<Map<String, Value>> {
    let bytes = STANDARD.decode(segment).ok()?;
    let text = String::from_utf8(bytes).ok()?;

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Merges decoded payload parameters with query parameters.
///
/// Query parameters form the base mapping; payload entries overwrite on key
/// collision (the payload is fixed at link-authoring time and takes priority
/// over ad hoc client query strings). Keys in `exclude` are removed last,
/// regardless of which source contributed them.
///
/// Pure and independent of iteration order within either source.
pub fn merge_params(
    payload: Option<&Map<String, Value>>,
    query: &Map<String, Value>,
    exclude: &[&str],
) -> Map<String, Value> {
    let mut merged = query.clone();

    if let Some(payload) = payload {
        for (key, value) in payload {
            merged.insert(key.clone(), value.clone());
        }
    }

    for key in exclude {
        merged.remove(*key);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected JSON object"),
        }
    }

    #[test]
    fn test_decode_valid_payload() {
        // {"foo":"bar","test":123}
        let decoded = decode_base64_json("eyJmb28iOiJiYXIiLCJ0ZXN0IjoxMjN9").unwrap();
        assert_eq!(decoded.get("foo"), Some(&json!("bar")));
        assert_eq!(decoded.get("test"), Some(&json!(123)));
    }

    #[test]
    fn test_decode_is_idempotent() {
        let segment = "eyJmb28iOiJiYXIifQ==";
        assert_eq!(decode_base64_json(segment), decode_base64_json(segment));
    }

    #[test]
    fn test_decode_invalid_base64_returns_none() {
        assert!(decode_base64_json("not-base64!!").is_none());
    }

    #[test]
    fn test_decode_invalid_json_returns_none() {
        // "hello": valid base64, not JSON
        assert!(decode_base64_json("aGVsbG8=").is_none());
    }

    #[test]
    fn test_decode_non_object_json_returns_none() {
        // "123": valid JSON, not an object
        assert!(decode_base64_json("MTIz").is_none());
    }

    #[test]
    fn test_merge_payload_wins_on_collision() {
        let payload = map(json!({"foo": "bar"}));
        let query = map(json!({"foo": "query", "baz": "1"}));

        let merged = merge_params(Some(&payload), &query, &[]);

        assert_eq!(merged.get("foo"), Some(&json!("bar")));
        assert_eq!(merged.get("baz"), Some(&json!("1")));
    }

    #[test]
    fn test_merge_excludes_keys_from_both_sources() {
        let payload = map(json!({"foo": "bar", "urltoken": "from-payload"}));
        let query = map(json!({"urltoken": "x"}));

        let merged = merge_params(Some(&payload), &query, &["urltoken"]);

        assert!(!merged.contains_key("urltoken"));
        assert_eq!(merged.get("foo"), Some(&json!("bar")));
    }

    #[test]
    fn test_merge_without_payload_filters_query() {
        let query = map(json!({"a": "1", "drop": "2"}));

        let merged = merge_params(None, &query, &["drop"]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("a"), Some(&json!("1")));
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let payload = map(json!({"foo": "bar"}));
        let query = map(json!({"baz": "1"}));

        let _ = merge_params(Some(&payload), &query, &["baz"]);

        assert!(query.contains_key("baz"));
        assert!(payload.contains_key("foo"));
    }
}
