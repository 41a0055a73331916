//! Loadboard HTTP Server - freight load lookup API
//!
//! Serves the in-memory load dataset from `loadboard-core` over HTTP,
//! behind a shared-secret `X-API-KEY` check.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod state;

pub use api::{HealthResponse, HealthStatus, LoadsResponse};
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
