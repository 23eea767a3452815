//! Note creation tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateNoteRequest;

/// Tool for creating new notes
#[derive(Default)]
pub struct CreateNoteTool;

#[async_trait]
impl McpTool for CreateNoteTool {
    fn name(&self) -> &'static str {
        "create_note"
    }

    fn description(&self) -> &'static str {
        "Create a new note. Content can be provided as markdown (default) or HTML via the contentFormat parameter. Attributes can be attached at creation."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "parentNoteId": {
                    "type": "string",
                    "description": "ID of the parent note (default: \"root\" for top-level)"
                },
                "title": {
                    "type": "string",
                    "description": "Title of the new note"
                },
                "content": {
                    "type": "string",
                    "description": "Content of the note (markdown by default)"
                },
                "contentFormat": {
                    "type": "string",
                    "enum": ["markdown", "html"],
                    "description": "Format of the provided content (default: \"markdown\")"
                },
                "type": {
                    "type": "string",
                    "enum": ["text", "code", "file", "image", "search", "book", "relationMap", "render"],
                    "description": "Type of note (default: \"text\")"
                },
                "mime": {
                    "type": "string",
                    "description": "MIME type for code notes (e.g., \"application/javascript\")"
                },
                "attributes": {
                    "type": "array",
                    "description": "Attributes to attach to the new note",
                    "items": {
                        "type": "object",
                        "properties": {
                            "type": {
                                "type": "string",
                                "enum": ["label", "relation"],
                                "description": "Attribute kind"
                            },
                            "name": {
                                "type": "string",
                                "description": "Attribute name"
                            },
                            "value": {
                                "type": "string",
                                "description": "Attribute value (a note ID for relations)"
                            },
                            "isInheritable": {
                                "type": "boolean",
                                "description": "Whether child notes inherit this attribute (default: false)"
                            }
                        },
                        "required": ["type", "name"]
                    }
                }
            },
            "required": ["title", "content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateNoteRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_create_note(request).await
    }
}
