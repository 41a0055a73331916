//! Shared-secret access control

use crate::error::AccessError;
use std::fmt;

/// Name of the request header carrying the client's key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Name of the environment variable holding the server's key
pub const API_KEY_ENV: &str = "API_KEY";

/// Gate that compares a presented key against the configured secret
#[derive(Clone, Default)]
pub struct ApiKeyGuard {
    secret: Option<Box<[u8]>>,
}

impl ApiKeyGuard {
    /// Create a guard. `None` and the empty string both leave it unconfigured.
    pub fn new(secret: Option<String>) -> Self {
        let secret = secret
            .filter(|s| !s.is_empty())
            .map(|s| s.into_bytes().into_boxed_slice());
        ApiKeyGuard { secret }
    }

    /// Whether a secret is configured
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Check a presented key.
    ///
    /// A missing server secret is reported before anything about the client
    /// is looked at. Otherwise the key must match byte for byte.
    pub fn authorize(&self, presented: Option<&[u8]>) -> Result<(), AccessError> {
        let secret = self.secret.as_deref().ok_or(AccessError::NotConfigured)?;

        match presented {
            Some(key) if key == secret => Ok(()),
            _ => Err(AccessError::Unauthorized),
        }
    }
}

// Never print the secret.
impl fmt::Debug for ApiKeyGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyGuard")
            .field("configured", &self.is_configured())
            .finish()
    }
}
