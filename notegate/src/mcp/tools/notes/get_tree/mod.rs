//! Note hierarchy tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetNoteTreeRequest;

/// Tool for materializing the hierarchy under a note
#[derive(Default)]
pub struct GetNoteTreeTool;

#[async_trait]
impl McpTool for GetNoteTreeTool {
    fn name(&self) -> &'static str {
        "get_note_tree"
    }

    fn description(&self) -> &'static str {
        "Get the children/hierarchy of a note"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "noteId": {
                    "type": "string",
                    "description": "The ID of the parent note (default: \"root\" for top-level notes)"
                },
                "depth": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 5,
                    "description": "How many levels deep to retrieve (default: 1, max: 5)"
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetNoteTreeRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_get_note_tree(request).await
    }
}
