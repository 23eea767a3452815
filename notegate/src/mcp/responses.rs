//! Response creation utilities for MCP tool calls
//!
//! Collaborator failures are converted into the error payload shape (message
//! plus error flag) here, never into a process abort; protocol-level errors
//! (unknown tool, malformed arguments) are raised elsewhere as `McpError`.

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent};

use crate::error::Result;

/// Create a success response for an MCP tool call
pub fn create_success_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(false),
    }
}

/// Create an error response for an MCP tool call
pub fn create_error_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(true),
    }
}

/// Convert an operation outcome into a tool call result
///
/// Failures are logged and downgraded to an error payload so a failed
/// operation never takes the server down.
pub fn tool_result(result: Result<String>, operation: &str) -> CallToolResult {
    match result {
        Ok(text) => create_success_response(text),
        Err(err) => {
            tracing::error!("MCP operation '{}' failed: {}", operation, err);
            create_error_response(format!("Error: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotegateError;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got: {other:?}"),
        }
    }

    #[test]
    fn test_success_result_carries_text_and_flag() {
        let result = tool_result(Ok("done".to_string()), "test_op");
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "done");
    }

    #[test]
    fn test_failure_becomes_error_payload() {
        let result = tool_result(
            Err(NotegateError::Validation("bad input".to_string())),
            "test_op",
        );
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: bad input");
    }
}
