//! Note retrieval tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetNoteRequest;

/// Tool for retrieving a single note
#[derive(Default)]
pub struct GetNoteTool;

#[async_trait]
impl McpTool for GetNoteTool {
    fn name(&self) -> &'static str {
        "get_note"
    }

    fn description(&self) -> &'static str {
        "Get a note by ID, including its content and metadata. Text note content is returned as markdown for easier reading and processing."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "noteId": {
                    "type": "string",
                    "description": "The ID of the note to retrieve"
                },
                "includeContent": {
                    "type": "boolean",
                    "description": "Whether to include the note content (default: true)"
                }
            },
            "required": ["noteId"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetNoteRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_get_note(request).await
    }
}
