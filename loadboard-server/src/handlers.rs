//! HTTP request handlers

use crate::api::{HealthResponse, LoadsResponse};
use crate::state::AppState;
use axum::{extract::State, http::Uri, Json};
use tracing::debug;

/// Return every load whose `load_id` equals the last path segment.
///
/// No match is a successful, empty list. The segment is percent-decoded
/// lossily, so ids that are not valid UTF-8 are looked up (and miss)
/// instead of being rejected.
pub async fn get_load(State(state): State<AppState>, uri: Uri) -> Json<LoadsResponse> {
    let load_id = load_id_from_path(uri.path());
    let loads = state.store.find_by_id_cloned(&load_id);

    debug!(load_id = %load_id, matches = loads.len(), "Load lookup");

    Json(loads)
}

/// Health check - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Decode the final segment of `path`, replacing invalid UTF-8 with U+FFFD
fn load_id_from_path(path: &str) -> String {
    let raw = path.rsplit('/').next().unwrap_or("");
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
