//! Handler for slug redirect resolution.

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::application::services::{GoneReason, Resolution};
use crate::domain::entities::{AccessRecord, LinkRecord};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves any request path into a redirect decision.
///
/// # Endpoint
///
/// Router fallback; the whole path shape is significant:
/// `GET /{slug}`, `GET /{slug}/{payload}`, `GET /`
///
/// # Request Flow
///
/// 1. `/` redirects to the configured home URL (404 without one)
/// 2. The resolver parses the path, looks up the slug, merges payload and
///    query parameters, and evaluates expiry
/// 3. On a found link (expired or not) the access log is written
///    best-effort; a failed write never changes the outcome
/// 4. Respond with the configured 3xx and `Location`, or 404/410
///
/// # Errors
///
/// - 404 if the slug is reserved, malformed, or unknown
/// - 410 `link_expired` if an expiry mechanism fired with no fallback URL
/// - 410 `invalid_link` if the date token failed to parse
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let path = uri.path();

    if path == "/" {
        return match &state.home_url {
            Some(home) => redirect_response(state.resolver.rules().status_code, home),
            None => Err(AppError::no_redirect(path)),
        };
    }

    let resolution = state.resolver.resolve(path, uri.query()).await;

    match resolution {
        Resolution::Redirect {
            slug,
            link,
            location,
            status,
        } => {
            write_access_log(&state, &slug, path, &headers, &link).await;
            redirect_response(status, &location)
        }
        Resolution::Gone { slug, link, reason } => {
            write_access_log(&state, &slug, path, &headers, &link).await;

            Err(match reason {
                GoneReason::Expired => AppError::expired(json!({ "slug": slug })),
                GoneReason::InvalidToken => AppError::invalid_token(json!({ "slug": slug })),
            })
        }
        Resolution::NotFound => Err(AppError::no_redirect(path)),
    }
}

/// Builds a redirect response with the configured status code.
fn redirect_response(status: u16, location: &str) -> Result<Response, AppError> {
    let status =
        StatusCode::from_u16(status).unwrap_or(StatusCode::TEMPORARY_REDIRECT);

    let location = HeaderValue::from_str(location).map_err(|_| {
        AppError::internal(
            "Redirect target is not a valid header value",
            json!({ "location": location }),
        )
    })?;

    Ok((status, [(header::LOCATION, location)]).into_response())
}

/// Records the hit best-effort; failures are logged and swallowed.
async fn write_access_log(
    state: &AppState,
    slug: &str,
    path: &str,
    headers: &HeaderMap,
    link: &LinkRecord,
) {
    let access = AccessRecord::new(
        slug,
        path,
        client_ip(headers),
        header_str(headers, header::USER_AGENT),
        header_str(headers, header::REFERER),
    );

    if let Err(e) = state.access_log.record(&access, link).await {
        warn!(slug, error = %e, "failed to write access log");
    }
}

/// Client IP as reported by proxy headers (`X-Forwarded-For`, `X-Real-IP`).
///
/// The service is designed to sit behind an edge proxy, so the peer socket
/// address is not meaningful here.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        return forwarded.split(',').next().map(|ip| ip.trim().to_string());
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
