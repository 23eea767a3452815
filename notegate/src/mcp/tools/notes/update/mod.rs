//! Note update tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UpdateNoteRequest;

/// Tool for updating existing notes
#[derive(Default)]
pub struct UpdateNoteTool;

#[async_trait]
impl McpTool for UpdateNoteTool {
    fn name(&self) -> &'static str {
        "update_note"
    }

    fn description(&self) -> &'static str {
        "Update a note's title, content, and/or attributes. Content can be provided as markdown (default) or HTML via the contentFormat parameter. Attributes are created or updated in place, matched by type and name."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "noteId": {
                    "type": "string",
                    "description": "ID of the note to update"
                },
                "title": {
                    "type": "string",
                    "description": "New title for the note"
                },
                "content": {
                    "type": "string",
                    "description": "New content for the note (markdown by default)"
                },
                "contentFormat": {
                    "type": "string",
                    "enum": ["markdown", "html"],
                    "description": "Format of the provided content (default: \"markdown\")"
                },
                "attributes": {
                    "type": "array",
                    "description": "Attributes to create or update on the note",
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
            "required": ["noteId"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UpdateNoteRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_update_note(request).await
    }
}
