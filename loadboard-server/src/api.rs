//! API response types

use serde::{Deserialize, Serialize};

pub use loadboard_core::Load;

/// Body of a successful lookup: every matching load, possibly none
pub type LoadsResponse = Vec<Load>;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: HealthStatus,
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Process is up and answering requests
    Ok,
}

impl HealthResponse {
    /// The fixed liveness payload
    pub fn ok() -> Self {
        HealthResponse {
            status: HealthStatus::Ok,
        }
    }
}
