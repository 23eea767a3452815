//! Exit code constants for the CLI
//!
//! - 0: success
//! - 1: recoverable error (the server failed to start or stopped abnormally)
//! - 2: fatal misconfiguration

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// The server failed to start or stopped abnormally
pub const EXIT_WARNING: i32 = 1;

/// Fatal misconfiguration (missing token, bad arguments)
pub const EXIT_ERROR: i32 = 2;
