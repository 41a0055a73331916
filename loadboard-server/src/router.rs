//! Route table

use crate::{auth, handlers, state::AppState};
use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// - `GET /v1/loads/:load_id` - lookup, requires `X-API-KEY`
/// - `GET /health` - liveness, unauthenticated
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/v1/loads/:load_id", get(handlers::get_load))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
