//! Unified error handling for the notegate library
//!
//! One typed error enum covers configuration, input validation, and every
//! failure class the remote store can produce. Collaborators propagate these
//! with `?`; the MCP facade converts them into error payloads at the boundary.

use thiserror::Error;

/// The main error type for the notegate library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NotegateError {
    /// Invalid or missing process configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tool input failed shape or range constraints
    #[error("{0}")]
    Validation(String),

    /// The store rejected the provided credentials
    #[error("Authentication failed. Check your NOTEGATE_TOKEN. ({0})")]
    Auth(String),

    /// The requested identifier does not exist in the store
    #[error("Not found: {endpoint} ({message})")]
    NotFound {
        /// Endpoint path that produced the 404
        endpoint: String,
        /// Message reported by the store
        message: String,
    },

    /// Any other non-success response from the store
    #[error("Store API error ({status}): {message}")]
    Api {
        /// HTTP status returned by the store
        status: u16,
        /// Message reported by the store
        message: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An attribute change failed after earlier changes had already been
    /// applied; the applied changes are not rolled back
    #[error(
        "Attribute '{name}' failed after {applied} of {total} requested changes were applied \
         (applied changes are not rolled back): {source}"
    )]
    AttributePartial {
        /// Name of the attribute whose change failed
        name: String,
        /// Number of changes already applied when the failure occurred
        applied: usize,
        /// Total number of changes requested
        total: usize,
        /// The underlying failure
        #[source]
        source: Box<NotegateError>,
    },
}

/// Result type alias for notegate operations
pub type Result<T> = std::result::Result<T, NotegateError>;
