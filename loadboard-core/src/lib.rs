//! Loadboard Core - freight load dataset and access control
//!
//! This crate holds the parts of the load lookup service that do not depend
//! on HTTP: the [`Load`] record, the read-only [`LoadStore`] with its
//! identifier index, and the shared-secret [`ApiKeyGuard`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod access;
pub mod error;
pub mod store;
pub mod types;

pub use access::{ApiKeyGuard, API_KEY_ENV, API_KEY_HEADER};
pub use error::{AccessError, LoadboardError, Result};
pub use store::LoadStore;
pub use types::Load;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
