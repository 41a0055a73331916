//! Error types for loadboard

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the dataset
#[derive(Error, Debug)]
pub enum LoadboardError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        /// Path of the dataset file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not a JSON array of loads
    #[error("Malformed dataset {path}: {source}")]
    Parse {
        /// Path of the dataset file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Rejection reasons from the access control filter
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// No shared secret is configured on the server
    #[error("API_KEY not configured on the server.")]
    NotConfigured,

    /// Presented key is missing or does not match
    #[error("Invalid or missing API Key")]
    Unauthorized,
}

/// Result type alias for dataset operations
pub type Result<T> = std::result::Result<T, LoadboardError>;
