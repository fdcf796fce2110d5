use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// HTTP-facing error taxonomy of the redirect engine.
///
/// `Gone` covers both terminal 410 conditions; the `code` distinguishes a
/// genuinely expired link from an unparsable date token, which share the
/// status but must differ in their user-facing message.
#[derive(Debug)]
pub enum AppError {
    NotFound {
        message: String,
        details: Value,
    },
    Gone {
        code: &'static str,
        message: String,
        details: Value,
    },
    Internal {
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// 410 for a link judged expired with no fallback URL.
    pub fn expired(details: Value) -> Self {
        Self::Gone {
            code: "link_expired",
            message: "This link has expired.".to_string(),
            details,
        }
    }

    /// 410 for a date token that failed to parse. Fail closed, but with a
    /// message distinct from a genuine expiry.
    pub fn invalid_token(details: Value) -> Self {
        Self::Gone {
            code: "invalid_link",
            message: "Invalid expiry token.".to_string(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Gone {
                code,
                message,
                details,
            } => (StatusCode::GONE, code, message, details),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl AppError {
    /// Convenience 404 for paths yielding no redirect decision.
    pub fn no_redirect(path: &str) -> Self {
        Self::not_found("Short link not found", json!({ "path": path }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_and_invalid_token_share_status_but_not_code() {
        let expired = AppError::expired(json!({}));
        let invalid = AppError::invalid_token(json!({}));

        let (
            AppError::Gone {
                code: expired_code, ..
            },
            AppError::Gone {
                code: invalid_code, ..
            },
        ) = (&expired, &invalid)
        else {
            panic!("expected gone variants");
        };

        assert_ne!(expired_code, invalid_code);
        assert_eq!(expired.into_response().status(), StatusCode::GONE);
        assert_eq!(invalid.into_response().status(), StatusCode::GONE);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::no_redirect("/promo").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
