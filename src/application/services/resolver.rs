//! Slug-to-redirect resolution service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::application::services::expiry::{self, ExpiryOutcome};
use crate::config::RedirectRules;
use crate::domain::entities::LinkRecord;
use crate::domain::stores::LinkStore;
use crate::utils::base64_json::{decode_base64_json, merge_params};
use crate::utils::path::parse_path;
use crate::utils::url_query::{append_query, parse_query};

/// Why a resolved link could not be redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoneReason {
    /// One of the expiry mechanisms fired and no fallback URL is set.
    Expired,
    /// The date token was present but unparsable.
    InvalidToken,
}

/// Decision produced by [`RedirectResolver::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Redirect to `location` with the configured status code.
    Redirect {
        slug: String,
        link: LinkRecord,
        location: String,
        status: u16,
    },
    /// Link found but terminally unavailable (410 Gone).
    Gone {
        slug: String,
        link: LinkRecord,
        reason: GoneReason,
    },
    /// No redirect decision; the caller falls through to 404.
    NotFound,
}

/// The redirect resolution engine.
///
/// Stateless per request: parses the path, resolves the slug against the
/// injected store (with case-sensitivity fallback), merges payload and query
/// parameters, evaluates both expiry mechanisms, and assembles the final
/// redirect target.
pub struct RedirectResolver {
    store: Arc<dyn LinkStore>,
    rules: RedirectRules,
}

impl RedirectResolver {
    pub fn new(store: Arc<dyn LinkStore>, rules: RedirectRules) -> Self {
        Self { store, rules }
    }

    pub fn rules(&self) -> &RedirectRules {
        &self.rules
    }

    /// Resolves a request path and query string into a redirect decision.
    ///
    /// # Resolution flow
    ///
    /// 1. Parse the path into slug + optional payload segment
    /// 2. Reserved-slug and slug-format guard (no store call on failure)
    /// 3. Store lookup under `link:<slug>`, with lower-case-first fallback
    ///    when case-insensitive
    /// 4. Decode the payload segment (soft-fail) and merge with query
    ///    parameters, payload winning on collision
    /// 5. Evaluate stored expiry, then the date token from the merged map
    /// 6. Build the final location, forwarding merged parameters (minus the
    ///    token parameter) when query forwarding is enabled
    ///
    /// Store failures are logged and degrade to [`Resolution::NotFound`];
    /// this method never errors.
    pub async fn resolve(&self, path: &str, raw_query: Option<&str>) -> Resolution {
        let parsed = parse_path(path);

        let Some(slug) = parsed.slug else {
            return Resolution::NotFound;
        };

        if !self.slug_allowed(&slug) {
            debug!(slug, "slug reserved or malformed, skipping lookup");
            return Resolution::NotFound;
        }

        let Some(link) = self.lookup(&slug).await else {
            return Resolution::NotFound;
        };

        let payload = parsed
            .payload_segment
            .as_deref()
            .and_then(decode_base64_json);
        let query = parse_query(raw_query);
        let mut merged = merge_params(payload.as_ref(), &query, &[]);

        let outcome = expiry::evaluate(
            &link,
            &merged,
            Utc::now(),
            &self.rules.token_param,
            self.rules.token_date_only,
        );

        // The token parameter is never forwarded, whatever the outcome.
        merged.remove(&self.rules.token_param);

        let target = match outcome {
            ExpiryOutcome::Valid => link.url.clone(),
            ExpiryOutcome::ExpiredWithFallback(fallback) => fallback,
            ExpiryOutcome::ExpiredNoFallback => {
                return Resolution::Gone {
                    slug,
                    link,
                    reason: GoneReason::Expired,
                };
            }
            ExpiryOutcome::InvalidToken => {
                return Resolution::Gone {
                    slug,
                    link,
                    reason: GoneReason::InvalidToken,
                };
            }
        };

        Resolution::Redirect {
            slug,
            link,
            location: self.build_location(&target, &merged),
            status: self.rules.status_code,
        }
    }

    /// Reserved-set and format guard, applied before any store call.
    fn slug_allowed(&self, slug: &str) -> bool {
        !self.rules.reserved_slugs.iter().any(|s| s == slug)
            && self.rules.slug_pattern.is_match(slug)
    }

    /// Looks up a slug, applying the case-sensitivity fallback policy.
    ///
    /// Case-insensitive mode tries the lower-cased slug first (links are
    /// commonly requested lower-cased by clients) and falls back to the
    /// original casing when that differs.
    async fn lookup(&self, slug: &str) -> Option<LinkRecord> {
        if self.rules.case_sensitive {
            return self.get_record(slug).await;
        }

        let lower = slug.to_lowercase();
        let link = self.get_record(&lower).await;

        if link.is_none() && lower != slug {
            debug!(slug, %lower, "lower-cased slug not found, trying original casing");
            return self.get_record(slug).await;
        }

        link
    }

    /// Single store fetch under the `link:<slug>` key.
    ///
    /// Store errors are logged and treated as "not found".
    async fn get_record(&self, slug: &str) -> Option<LinkRecord> {
        let key = format!("link:{}", slug);

        match self
            .store
            .get(&key, Some(self.rules.link_cache_ttl))
            .await
        {
            Ok(link) => link,
            Err(e) => {
                warn!(%key, error = %e, "link store lookup failed");
                None
            }
        }
    }

    fn build_location(&self, target: &str, forwarded: &Map<String, Value>) -> String {
        if self.rules.redirect_with_query {
            append_query(target, forwarded)
        } else {
            target.to_string()
        }
    }
}
