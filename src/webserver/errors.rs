/// Outward error translation
///
/// The one place where lookup failures become HTTP status codes. Handlers
/// convert a `LookupError` into an [`ApiError`] right before responding;
/// nothing below the webserver knows about status codes.
///
/// | Failure                         | Status |
/// |---------------------------------|--------|
/// | upstream 429                    | 429    |
/// | upstream 5xx                    | 502    |
/// | upstream other non-2xx          | 503    |
/// | upstream timeout / unreachable  | 504    |
/// | malformed upstream data         | 502    |
/// | request validation              | 422    |
/// | unsupported method              | 405    |
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::{LookupError, UpstreamError};
use crate::webserver::models::ErrorResponse;

/// Error response: status code plus `{"detail": ...}` body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Malformed or out-of-bounds request
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    }
}

impl From<&UpstreamError> for ApiError {
    fn from(err: &UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status: 429 } => {
                ApiError::new(StatusCode::TOO_MANY_REQUESTS, "Rate limit from upstream")
            }
            UpstreamError::Status { status } if (500..600).contains(status) => {
                ApiError::new(StatusCode::BAD_GATEWAY, "Upstream server error")
            }
            UpstreamError::Status { status } => ApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Upstream returned {}", status),
            ),
            UpstreamError::Timeout { .. } => {
                ApiError::new(StatusCode::GATEWAY_TIMEOUT, "Upstream timeout")
            }
            UpstreamError::Unreachable(_) => {
                ApiError::new(StatusCode::GATEWAY_TIMEOUT, "Upstream unreachable")
            }
            UpstreamError::MalformedPayload(_) => {
                ApiError::new(StatusCode::BAD_GATEWAY, "Upstream returned malformed payload")
            }
        }
    }
}

impl From<&LookupError> for ApiError {
    fn from(err: &LookupError) -> Self {
        match err {
            LookupError::Upstream(upstream) => upstream.into(),
            LookupError::Aggregation(_) => ApiError::new(
                StatusCode::BAD_GATEWAY,
                "Upstream returned malformed liquidity data",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}
