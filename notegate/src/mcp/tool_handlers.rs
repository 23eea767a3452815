//! Tool handlers for the note operations
//!
//! Each handler validates its input, composes the converter, materializer,
//! reconciler, and gateway, and shapes the outcome into a tool call payload.
//! The handlers hold no state beyond the shared store client.

use std::sync::Arc;

use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

use super::constants::{
    DEFAULT_SEARCH_LIMIT, DEFAULT_TREE_DEPTH, MAX_SEARCH_LIMIT, MAX_TREE_DEPTH, MIN_SEARCH_LIMIT,
    MIN_TREE_DEPTH, ROOT_NOTE_ID,
};
use super::responses::tool_result;
use super::shared_utils::McpValidation;
use super::types::{
    CreateNoteRequest, DeleteNoteRequest, GetNoteRequest, GetNoteTreeRequest, SearchNotesRequest,
    UpdateNoteRequest,
};
use crate::attrs::reconcile_attributes;
use crate::convert;
use crate::error::{NotegateError, Result};
use crate::store::types::{Attribute, CreateNoteParams, NoteKind};
use crate::store::StoreClient;
use crate::tree::build_tree;

/// Tool handlers for the MCP note operations
#[derive(Clone)]
pub struct ToolHandlers {
    client: Arc<StoreClient>,
}

/// Reduce a note's attributes to the caller-facing projection
fn attribute_projection(attributes: &[Attribute]) -> Vec<serde_json::Value> {
    attributes
        .iter()
        .map(|attr| {
            json!({
                "type": attr.kind,
                "name": attr.name,
                "value": attr.value,
            })
        })
        .collect()
}

impl ToolHandlers {
    /// Create handlers sharing the given store client
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    /// Handle the search_notes tool
    pub async fn handle_search_notes(
        &self,
        request: SearchNotesRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(tool_result(self.search_notes(request).await, "search_notes"))
    }

    async fn search_notes(&self, request: SearchNotesRequest) -> Result<String> {
        McpValidation::validate_not_empty("query", &request.query)?;
        let limit = McpValidation::validate_range(
            "limit",
            request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            MIN_SEARCH_LIMIT,
            MAX_SEARCH_LIMIT,
        )?;

        tracing::debug!("searching notes: {:?} (limit {})", request.query, limit);
        let results = self.client.search_notes(&request.query, limit).await?;

        if results.is_empty() {
            return Ok(format!("No notes found matching \"{}\"", request.query));
        }

        let notes: Vec<_> = results
            .iter()
            .map(|note| {
                json!({
                    "noteId": note.note_id,
                    "title": note.title,
                    "type": note.kind,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json!({
            "count": notes.len(),
            "notes": notes,
        }))?)
    }

    /// Handle the get_note tool
    pub async fn handle_get_note(
        &self,
        request: GetNoteRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(tool_result(self.get_note(request).await, "get_note"))
    }

    async fn get_note(&self, request: GetNoteRequest) -> Result<String> {
        let include_content = request.include_content.unwrap_or(true);
        tracing::debug!(
            "getting note {} (content: {})",
            request.note_id,
            include_content
        );

        if include_content {
            let fetched = self.client.get_note_with_content(&request.note_id).await?;
            let rendered = convert::content_for_caller(fetched.note.kind, fetched.content);
            let note = fetched.note;

            return Ok(serde_json::to_string_pretty(&json!({
                "noteId": note.note_id,
                "title": note.title,
                "type": note.kind,
                "mime": note.mime,
                "content": rendered.body,
                "contentFormat": rendered.format,
                "dateCreated": note.date_created,
                "dateModified": note.date_modified,
                "attributes": attribute_projection(&note.attributes),
            }))?);
        }

        let note = self.client.get_note(&request.note_id).await?;
        Ok(serde_json::to_string_pretty(&json!({
            "noteId": note.note_id,
            "title": note.title,
            "type": note.kind,
            "mime": note.mime,
            "dateCreated": note.date_created,
            "dateModified": note.date_modified,
            "attributes": attribute_projection(&note.attributes),
        }))?)
    }

    /// Handle the get_note_tree tool
    pub async fn handle_get_note_tree(
        &self,
        request: GetNoteTreeRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(tool_result(
            self.get_note_tree(request).await,
            "get_note_tree",
        ))
    }

    async fn get_note_tree(&self, request: GetNoteTreeRequest) -> Result<String> {
        let depth = McpValidation::validate_range(
            "depth",
            request.depth.unwrap_or(DEFAULT_TREE_DEPTH),
            MIN_TREE_DEPTH,
            MAX_TREE_DEPTH,
        )?;
        let root = request
            .note_id
            .unwrap_or_else(|| ROOT_NOTE_ID.to_string());

        tracing::debug!("materializing tree under {} (depth {})", root, depth);
        let children = build_tree(&self.client, root.clone(), 1, depth).await?;

        if children.is_empty() {
            return Ok(format!("No child notes found under \"{root}\""));
        }

        Ok(serde_json::to_string_pretty(&json!({
            "parentNoteId": root,
            "depth": depth,
            "children": children,
        }))?)
    }

    /// Handle the create_note tool
    pub async fn handle_create_note(
        &self,
        request: CreateNoteRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(tool_result(self.create_note(request).await, "create_note"))
    }

    async fn create_note(&self, request: CreateNoteRequest) -> Result<String> {
        let kind = request.kind.unwrap_or(NoteKind::Text);
        let format = request.content_format.unwrap_or_default();
        let parent_note_id = request
            .parent_note_id
            .unwrap_or_else(|| ROOT_NOTE_ID.to_string());

        let content = convert::content_for_store(kind, request.content, format);
        tracing::debug!("creating {:?} note under {}", kind, parent_note_id);

        let created = self
            .client
            .create_note(&CreateNoteParams {
                parent_note_id: parent_note_id.clone(),
                title: request.title,
                kind,
                content,
                mime: request.mime,
            })
            .await?;

        let mut payload = json!({
            "success": true,
            "noteId": created.note.note_id,
            "title": created.note.title,
            "type": created.note.kind,
            "parentNoteId": parent_note_id,
        });

        // A freshly created note has no attributes, so every desired entry
        // is a creation.
        if !request.attributes.is_empty() {
            let applied = reconcile_attributes(
                &self.client,
                &created.note.note_id,
                &[],
                &request.attributes,
            )
            .await?;
            payload["attributes"] = serde_json::to_value(&applied)?;
        }

        tracing::info!("created note {}", created.note.note_id);
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Handle the update_note tool
    pub async fn handle_update_note(
        &self,
        request: UpdateNoteRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(tool_result(self.update_note(request).await, "update_note"))
    }

    async fn update_note(&self, request: UpdateNoteRequest) -> Result<String> {
        let UpdateNoteRequest {
            note_id,
            title,
            content,
            content_format,
            attributes,
        } = request;

        let has_attributes = attributes.as_ref().is_some_and(|specs| !specs.is_empty());
        if title.is_none() && content.is_none() && !has_attributes {
            return Err(NotegateError::Validation(
                "At least one of \"title\", \"content\", or \"attributes\" must be provided"
                    .to_string(),
            ));
        }

        let mut updated = Vec::new();

        if let Some(title) = title {
            self.client.update_note_title(&note_id, &title).await?;
            updated.push("title");
        }

        if content.is_some() || has_attributes {
            // One snapshot serves both: the kind steers content conversion
            // and the attribute list is the reconciliation baseline.
            let note = self.client.get_note(&note_id).await?;

            if let Some(content) = content {
                let body = convert::content_for_store(
                    note.kind,
                    content,
                    content_format.unwrap_or_default(),
                );
                self.client.update_note_content(&note_id, &body).await?;
                updated.push("content");
            }

            if has_attributes {
                let desired = attributes.unwrap_or_default();
                reconcile_attributes(&self.client, &note_id, &note.attributes, &desired).await?;
                updated.push("attributes");
            }
        }

        tracing::info!("updated note {} ({})", note_id, updated.join(", "));
        Ok(serde_json::to_string_pretty(&json!({
            "success": true,
            "noteId": note_id,
            "updated": updated,
        }))?)
    }

    /// Handle the delete_note tool
    pub async fn handle_delete_note(
        &self,
        request: DeleteNoteRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(tool_result(self.delete_note(request).await, "delete_note"))
    }

    async fn delete_note(&self, request: DeleteNoteRequest) -> Result<String> {
        self.client.delete_note(&request.note_id).await?;

        tracing::info!("deleted note {}", request.note_id);
        Ok(serde_json::to_string_pretty(&json!({
            "success": true,
            "noteId": request.note_id,
            "message": "Note deleted successfully",
        }))?)
    }
}
