/// Response helpers shared by route handlers
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::LookupError;
use crate::logger::{self, LogTag};
use crate::webserver::errors::ApiError;

/// 200 OK with a JSON body
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Translate a failed lookup into its outward response, logging it once
pub fn lookup_error_response(context: &str, err: &LookupError) -> Response {
    let api_error = ApiError::from(err);

    // Transport failures go under the upstream API tag
    let tag = match err {
        LookupError::Upstream(upstream) if upstream.is_transport() => LogTag::Api,
        _ => LogTag::Webserver,
    };

    logger::warning(
        tag,
        &format!(
            "{} failed: {} (responding {})",
            context,
            err,
            api_error.status.as_u16()
        ),
    );

    api_error.into_response()
}
