//! Store connection configuration
//!
//! The configuration is built exactly once at process start and passed by
//! reference to every component; there is no lazily-initialized global state.

use crate::error::{NotegateError, Result};

/// Environment variable holding the store base address
pub const URL_ENV_VAR: &str = "NOTEGATE_URL";

/// Environment variable holding the store authentication token
pub const TOKEN_ENV_VAR: &str = "NOTEGATE_TOKEN";

/// Base address used when the environment does not provide one
pub const DEFAULT_URL: &str = "http://localhost:37840";

/// Connection parameters for the remote notes store
///
/// Read-only for the lifetime of the process; shared across operations
/// without locking.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base address of the store, without a trailing slash
    pub base_url: String,
    /// Bearer-style token sent in the `Authorization` header
    pub token: String,
}

impl StoreConfig {
    /// Create a configuration from explicit parts
    ///
    /// A trailing slash on the base address is removed so endpoint paths can
    /// be appended directly.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(NotegateError::Config(format!(
                "{TOKEN_ENV_VAR} is required. Get your token from the store's options page."
            )));
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, token })
    }

    /// Build the configuration from the process environment
    ///
    /// `NOTEGATE_URL` defaults to a local address; a missing `NOTEGATE_TOKEN`
    /// is a fatal startup condition.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_URL.to_string());
        let token = std::env::var(TOKEN_ENV_VAR).unwrap_or_default();
        Self::new(base_url, token)
    }
}
