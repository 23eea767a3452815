//! Note management tools
//!
//! Six tools cover the agent-facing surface of the remote notes store:
//!
//! - **search**: query notes with the store's search syntax
//! - **get**: fetch one note, its content converted to markdown for text notes
//! - **get_tree**: materialize a bounded hierarchy under a note
//! - **create**: create a note, converting markdown content to markup
//! - **update**: change title, content, and/or attributes of a note
//! - **delete**: remove a note
//!
//! All tools parse their arguments through `BaseToolImpl::parse_arguments`
//! and delegate to `ToolHandlers`, which owns validation and output shaping.

pub mod create;
pub mod delete;
pub mod get;
pub mod get_tree;
pub mod search;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all note tools with the registry
pub fn register_note_tools(registry: &mut ToolRegistry) {
    registry.register(search::SearchNotesTool);
    registry.register(get::GetNoteTool);
    registry.register(get_tree::GetNoteTreeTool);
    registry.register(create::CreateNoteTool);
    registry.register(update::UpdateNoteTool);
    registry.register(delete::DeleteNoteTool);
}
