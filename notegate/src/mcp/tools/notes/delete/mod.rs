//! Note deletion tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::DeleteNoteRequest;

/// Tool for deleting notes
#[derive(Default)]
pub struct DeleteNoteTool;

#[async_trait]
impl McpTool for DeleteNoteTool {
    fn name(&self) -> &'static str {
        "delete_note"
    }

    fn description(&self) -> &'static str {
        "Delete a note from the store"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "noteId": {
                    "type": "string",
                    "description": "ID of the note to delete"
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
        let request: DeleteNoteRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_delete_note(request).await
    }
}
