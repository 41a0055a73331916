//! API key middleware for protected routes

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use loadboard_core::API_KEY_HEADER;
use tracing::debug;

/// Reject the request unless `X-API-KEY` matches the configured secret.
///
/// Attach with `route_layer` so unmatched paths still fall through to 404.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| value.as_bytes());

    if let Err(e) = state.guard.authorize(presented) {
        debug!(
            path = %request.uri().path(),
            has_key = presented.is_some(),
            reason = %e,
            "Rejected request"
        );
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
