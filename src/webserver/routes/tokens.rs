use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::{
    logger::{self, LogTag},
    webserver::{
        errors::ApiError,
        models::TokensBatchRequest,
        state::AppState,
        utils::{lookup_error_response, success_response},
    },
};

/// Create token routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/token/:chain/:address", get(get_token))
        .route("/tokens/info", post(get_tokens_batch))
}

/// GET /token/:chain/:address
///
/// Aggregated liquidity for one token
async fn get_token(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Response {
    let (chain, address) = match path {
        Ok(Path(segments)) => segments,
        Err(rejection) => {
            logger::warning(
                LogTag::Webserver,
                &format!("Rejected token path: {}", rejection.body_text()),
            );
            return ApiError::validation(rejection.body_text()).into_response();
        }
    };

    logger::debug(
        LogTag::Tokens,
        &format!("Token lookup: chain={} address={}", chain, address),
    );

    match state.tokens.get_token_info(&chain, &address).await {
        Ok(info) => success_response(info),
        Err(e) => lookup_error_response(&format!("Lookup {}/{}", chain, address), &e),
    }
}

/// POST /tokens/info
///
/// All-or-nothing batch: one failed lookup fails the whole request
async fn get_tokens_batch(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TokensBatchRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            logger::warning(
                LogTag::Webserver,
                &format!("Rejected batch body: {}", rejection.body_text()),
            );
            return ApiError::validation(rejection.body_text()).into_response();
        }
    };

    let max_tokens = state.config.batch.max_tokens;
    if request.tokens.len() > max_tokens {
        logger::warning(
            LogTag::Webserver,
            &format!(
                "Rejected batch of {} tokens (max {})",
                request.tokens.len(),
                max_tokens
            ),
        );
        return ApiError::validation(format!(
            "Too many tokens: {} requested, at most {} allowed",
            request.tokens.len(),
            max_tokens
        ))
        .into_response();
    }

    match state.tokens.get_many(&request.tokens).await {
        Ok(infos) => success_response(infos),
        Err(e) => lookup_error_response(
            &format!("Batch of {} tokens", request.tokens.len()),
            &e,
        ),
    }
}
