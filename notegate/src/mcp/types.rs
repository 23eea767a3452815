//! Request types for the note tools

use serde::{Deserialize, Serialize};

use crate::attrs::AttributeSpec;
use crate::convert::ContentFormat;
use crate::store::types::NoteKind;

/// Request to search for notes
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchNotesRequest {
    /// Search query using the store's search syntax
    pub query: String,
    /// Maximum number of results to return (default 100, range 1-1000)
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Request to get a note by identifier
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetNoteRequest {
    /// Identifier of the note to retrieve
    pub note_id: String,
    /// Whether to include the note content (default true)
    #[serde(default)]
    pub include_content: Option<bool>,
}

/// Request to materialize a note's hierarchy
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetNoteTreeRequest {
    /// Identifier of the parent note (default "root")
    #[serde(default)]
    pub note_id: Option<String>,
    /// How many levels deep to retrieve (default 1, range 1-5)
    #[serde(default)]
    pub depth: Option<u32>,
}

/// Request to create a note
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    /// Identifier of the parent note (default "root")
    #[serde(default)]
    pub parent_note_id: Option<String>,
    /// Title of the new note
    pub title: String,
    /// Content of the note
    pub content: String,
    /// Declared format of `content` (default markdown)
    #[serde(default)]
    pub content_format: Option<ContentFormat>,
    /// Kind of note to create (default text)
    #[serde(default, rename = "type")]
    pub kind: Option<NoteKind>,
    /// MIME type for code notes
    #[serde(default)]
    pub mime: Option<String>,
    /// Attributes to apply to the new note
    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,
}

/// Request to update a note
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    /// Identifier of the note to update
    pub note_id: String,
    /// New title for the note
    #[serde(default)]
    pub title: Option<String>,
    /// New content for the note
    #[serde(default)]
    pub content: Option<String>,
    /// Declared format of `content` (default markdown)
    #[serde(default)]
    pub content_format: Option<ContentFormat>,
    /// Attributes to reconcile against the note's existing set
    #[serde(default)]
    pub attributes: Option<Vec<AttributeSpec>>,
}

/// Request to delete a note
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteRequest {
    /// Identifier of the note to delete
    pub note_id: String,
}
