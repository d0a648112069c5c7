use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;

use crate::{
    logger::{self, LogTag},
    webserver::{errors::ApiError, state::AppState},
};

pub mod status;
pub mod tokens;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(status::routes())
        .merge(tokens::routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}

/// Unknown paths get the same `{"detail"}` body as every other error
async fn not_found(uri: Uri) -> Response {
    logger::debug(LogTag::Webserver, &format!("No route for {}", uri.path()));
    ApiError::not_found().into_response()
}

/// Known path, unsupported method
async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    logger::debug(
        LogTag::Webserver,
        &format!("{} not allowed on {}", method, uri.path()),
    );
    ApiError::method_not_allowed().into_response()
}
