//! Application state

use crate::config::ServerConfig;
use loadboard_core::{ApiKeyGuard, LoadStore};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only load dataset
    pub store: Arc<LoadStore>,

    /// Shared-secret gate for protected routes
    pub guard: Arc<ApiKeyGuard>,
}

impl AppState {
    /// Create application state from an already built store and guard
    pub fn new(store: LoadStore, guard: ApiKeyGuard) -> Self {
        Self {
            store: Arc::new(store),
            guard: Arc::new(guard),
        }
    }

    /// Load the dataset and build the guard as configured.
    ///
    /// A dataset that cannot be read yields an empty store.
    pub fn from_config(config: &ServerConfig) -> Self {
        let store = LoadStore::load_or_empty(&config.loads_path);
        let guard = ApiKeyGuard::new(config.api_key.clone());
        Self::new(store, guard)
    }
}
