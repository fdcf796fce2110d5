//! Request path parsing for the redirect engine.

/// Path segments relevant to redirect resolution.
///
/// `slug` is the first non-empty path segment; `payload_segment` is the
/// segment that follows it (a base64 blob carrying extra parameters), when
/// present. Query markers are stripped from both, so neither ever contains
/// a `?`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPath {
    pub slug: Option<String>,
    pub payload_segment: Option<String>,
}

/// Splits a raw request path into a slug and an optional payload segment.
///
/// Strips exactly one leading and one trailing `/` before splitting, so
/// `"/promo/"` and `"promo"` parse the same. Any `?`-suffixed remainder that
/// leaked into a segment is truncated at the first `?`.
///
/// Never fails: an empty or malformed path degrades to "no slug" or
/// "no payload" rather than an error.
pub fn parse_path(raw: &str) -> ParsedPath {
    let trimmed = raw.strip_prefix('/').unwrap_or(raw);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    let mut segments = trimmed.split('/').map(strip_query).filter(|s| !s.is_empty());

    let slug = segments.next().map(str::to_owned);
    let payload_segment = segments.next().map(str::to_owned);

    ParsedPath {
        slug,
        payload_segment,
    }
}

/// Truncates a segment at the first `?`, dropping any retained query string.
fn strip_query(segment: &str) -> &str {
    segment.split('?').next().unwrap_or(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_slug() {
        let parsed = parse_path("/promo");
        assert_eq!(parsed.slug.as_deref(), Some("promo"));
        assert!(parsed.payload_segment.is_none());
    }

    #[test]
    fn test_parse_slug_with_payload() {
        let parsed = parse_path("/promo/eyJmb28iOiJiYXIifQ==");
        assert_eq!(parsed.slug.as_deref(), Some("promo"));
        assert_eq!(parsed.payload_segment.as_deref(), Some("eyJmb28iOiJiYXIifQ=="));
    }

    #[test]
    fn test_parse_strips_trailing_slash() {
        let parsed = parse_path("/promo/");
        assert_eq!(parsed.slug.as_deref(), Some("promo"));
        assert!(parsed.payload_segment.is_none());
    }

    #[test]
    fn test_parse_root_path_yields_no_slug() {
        assert_eq!(parse_path("/"), ParsedPath::default());
        assert_eq!(parse_path(""), ParsedPath::default());
    }

    #[test]
    fn test_parse_truncates_query_in_slug() {
        let parsed = parse_path("/promo?coupon=SAVE10");
        assert_eq!(parsed.slug.as_deref(), Some("promo"));
        assert!(parsed.payload_segment.is_none());
    }

    #[test]
    fn test_parse_truncates_query_in_payload() {
        let parsed = parse_path("/promo/abc123?x=1");
        assert_eq!(parsed.slug.as_deref(), Some("promo"));
        assert_eq!(parsed.payload_segment.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        let parsed = parse_path("//promo");
        assert_eq!(parsed.slug.as_deref(), Some("promo"));
        assert!(parsed.payload_segment.is_none());
    }

    #[test]
    fn test_parse_preserves_slug_case() {
        let parsed = parse_path("/MySlug");
        assert_eq!(parsed.slug.as_deref(), Some("MySlug"));
    }

    #[test]
    fn test_parse_query_only_payload_is_dropped() {
        let parsed = parse_path("/promo/?x=1");
        assert_eq!(parsed.slug.as_deref(), Some("promo"));
        assert!(parsed.payload_segment.is_none());
    }
}
