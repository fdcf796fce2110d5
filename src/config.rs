//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Engine-relevant knobs are collected into [`RedirectRules`], which
//! is injected into the resolver so tests can supply their own rules without
//! touching process state.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REDIS_URL` / `REDIS_HOST` - Link store connection; without it the
//!   service falls back to an empty in-memory store
//! - `HOME_URL` - Redirect target for `/` (optional; `/` is 404 without it)
//! - `REDIRECT_STATUS_CODE` - 3xx status for all redirects (default: 307)
//! - `REDIRECT_WITH_QUERY` - Forward merged parameters (default: true)
//! - `CASE_SENSITIVE` - Disable lower-case slug fallback (default: false)
//! - `LINK_CACHE_TTL` - Advisory read-cache TTL in seconds (default: 60)
//! - `RESERVED_SLUGS` - Comma-separated slugs never resolved (default: `dashboard`)
//! - `SLUG_PATTERN` - Regex a slug must match, applied case-insensitively
//! - `TOKEN_PARAM` - Parameter name carrying the date token (default: `urltoken`)
//! - `TOKEN_DATE_ONLY` - Ignore time-of-day in token comparison (default: true)

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::env;

/// Default slug format: lower-case alphanumeric runs joined by single
/// hyphens, matched case-insensitively.
pub const DEFAULT_SLUG_PATTERN: &str = "^[a-z0-9]+(?:-[a-z0-9]+)*$";

/// Parameter name under which the date token travels by default.
pub const DEFAULT_TOKEN_PARAM: &str = "urltoken";

/// Engine-level resolution rules, independent of process configuration.
#[derive(Debug, Clone)]
pub struct RedirectRules {
    /// When false, slugs are looked up lower-cased first with a fallback to
    /// the original casing.
    pub case_sensitive: bool,
    /// Forward merged parameters on the redirect target.
    pub redirect_with_query: bool,
    /// 3xx status used for successful and expiry-fallback redirects.
    pub status_code: u16,
    /// Advisory read-cache TTL (seconds) passed to the store on each lookup.
    pub link_cache_ttl: u64,
    /// Slugs that never resolve, checked before any store call.
    pub reserved_slugs: Vec<String>,
    /// Format a slug must match before any store call.
    pub slug_pattern: Regex,
    /// Parameter name carrying the date token. Always stripped from
    /// forwarded parameters.
    pub token_param: String,
    /// Compare token dates by calendar date only, ignoring time-of-day.
    pub token_date_only: bool,
}

impl Default for RedirectRules {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            redirect_with_query: true,
            status_code: 307,
            link_cache_ttl: 60,
            reserved_slugs: vec!["dashboard".to_string()],
            slug_pattern: default_slug_pattern(),
            token_param: DEFAULT_TOKEN_PARAM.to_string(),
            token_date_only: true,
        }
    }
}

fn default_slug_pattern() -> Regex {
    RegexBuilder::new(DEFAULT_SLUG_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("default slug pattern is valid")
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub redis_url: Option<String>,
    /// Redirect target for the root path. `/` falls through to 404 when unset.
    pub home_url: Option<String>,
    pub rules: RedirectRules,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SLUG_PATTERN` is set but not a valid regex.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let redis_url = Self::load_redis_url();
        let home_url = env::var("HOME_URL").ok().filter(|v| !v.is_empty());

        let status_code = env::var("REDIRECT_STATUS_CODE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(307);

        let link_cache_ttl = env::var("LINK_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let reserved_slugs = env::var("RESERVED_SLUGS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_else(|_| vec!["dashboard".to_string()]);

        let slug_pattern = match env::var("SLUG_PATTERN") {
            Ok(pattern) => RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("SLUG_PATTERN is not a valid regex: '{}'", pattern))?,
            Err(_) => default_slug_pattern(),
        };

        let token_param =
            env::var("TOKEN_PARAM").unwrap_or_else(|_| DEFAULT_TOKEN_PARAM.to_string());

        let rules = RedirectRules {
            case_sensitive: env_bool("CASE_SENSITIVE", false),
            redirect_with_query: env_bool("REDIRECT_WITH_QUERY", true),
            status_code,
            link_cache_ttl,
            reserved_slugs,
            slug_pattern,
            token_param,
            token_date_only: env_bool("TOKEN_DATE_ONLY", true),
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            redis_url,
            home_url,
            rules,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if the store is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match env::var("REDIS_PASSWORD") {
            Ok(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `redis_url` has a non-Redis scheme
    /// - `status_code` is not a 3xx code
    /// - `token_param` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                redis_url
            );
        }

        if !(300..400).contains(&self.rules.status_code) {
            anyhow::bail!(
                "REDIRECT_STATUS_CODE must be a 3xx status, got {}",
                self.rules.status_code
            );
        }

        if self.rules.token_param.is_empty() {
            anyhow::bail!("TOKEN_PARAM must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without credentials).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Link store: {}", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Link store: in-memory (REDIS_URL not set)");
        }

        tracing::info!(
            "  Home URL: {}",
            self.home_url.as_deref().unwrap_or("(none)")
        );
        tracing::info!("  Redirect status: {}", self.rules.status_code);
        tracing::info!("  Forward query: {}", self.rules.redirect_with_query);
        tracing::info!("  Case sensitive: {}", self.rules.case_sensitive);
        tracing::info!("  Reserved slugs: {:?}", self.rules.reserved_slugs);
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(default)
}

/// Masks the password in connection strings for logging.
fn mask_connection_string(url: &str) -> String {
    if let Some(scheme_end) = url.find("://") {
        let rest = &url[scheme_end + 3..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!(
                    "{}://{}:***{}",
                    &url[..scheme_end],
                    username,
                    &rest[at_pos..]
                );
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded (e.g. via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
