//! Shared validation helpers for the note tools
//!
//! Validation failures surface immediately, before any remote call is
//! attempted.

use crate::error::{NotegateError, Result};

/// Common input validation for MCP operations
pub struct McpValidation;

impl McpValidation {
    /// Validate that a numeric parameter lies within a closed range
    pub fn validate_range(field: &str, value: u32, min: u32, max: u32) -> Result<u32> {
        if value < min || value > max {
            return Err(NotegateError::Validation(format!(
                "Parameter \"{field}\" must be between {min} and {max}, got {value}"
            )));
        }
        Ok(value)
    }

    /// Validate that a string parameter is non-empty
    pub fn validate_not_empty(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(NotegateError::Validation(format!(
                "Parameter \"{field}\" must not be empty"
            )));
        }
        Ok(())
    }
}
