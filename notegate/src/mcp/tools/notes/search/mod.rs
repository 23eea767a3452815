//! Note search tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchNotesRequest;

/// Tool for searching notes
#[derive(Default)]
pub struct SearchNotesTool;

#[async_trait]
impl McpTool for SearchNotesTool {
    fn name(&self) -> &'static str {
        "search_notes"
    }

    fn description(&self) -> &'static str {
        "Search for notes using full-text search or attribute queries"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query using the store's search syntax. Examples: \"keyword\" (full-text search), \"#label\" (notes with a label), \"#label=value\" (label with specific value), \"#tag=recipe AND #tag=vegetarian\" (notes with multiple tags), \"note.title =* prefix\" (title prefix match)"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 1000,
                    "description": "Maximum number of results to return (default: 100)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchNotesRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_search_notes(request).await
    }
}
