//! Query-string assembly for redirect targets.

use serde_json::{Map, Value};
use url::Url;
use url::form_urlencoded;

/// Parses a raw query string into a parameter map.
///
/// Values decode as strings; on a repeated key the last occurrence wins.
/// An empty or absent query yields an empty map.
pub fn parse_query(raw: Option<&str>) -> Map<String, Value> {
    let Some(raw) = raw else {
        return Map::new();
    };

    form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect()
}

/// Appends forwarded parameters to a redirect target URL.
///
/// Any query string already present on the target is preserved; forwarded
/// parameters are appended after it rather than overwriting it. String values
/// are used verbatim, numbers and booleans render as their JSON text, arrays
/// and objects as serialized JSON. `null` values are skipped.
///
/// Appending goes through `Url::parse`, which normalizes the target; in
/// particular a host-only URL gains a root path (`https://example.com`
/// becomes `https://example.com/?k=v`).
///
/// If the target is not a parseable absolute URL it is returned unchanged;
/// a broken stored URL surfaces as-is instead of failing the redirect.
pub fn append_query(target: &str, params: &Map<String, Value>) -> String {
    if params.is_empty() {
        return target.to_string();
    }

    let Ok(mut url) = Url::parse(target) else {
        return target.to_string();
    };

    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    pairs.append_pair(key, s);
                }
                other => {
                    pairs.append_pair(key, &other.to_string());
                }
            }
        }
    }

    url.to_string()
}
