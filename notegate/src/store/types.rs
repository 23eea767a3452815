//! Wire types for the remote store API
//!
//! These mirror the JSON shapes of the store's external HTTP interface.
//! Identifiers are opaque strings; timestamps are store-assigned and carried
//! verbatim.

use serde::{Deserialize, Serialize};

/// The closed set of note kinds the store supports
///
/// The kind is immutable after creation and steers content conversion at the
/// format converter boundary: `Text` notes are rich markup on the wire, every
/// other kind is an opaque passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum NoteKind {
    /// Rich-text note; HTML on the wire, markdown at the tool boundary
    Text,
    /// Source code with an associated MIME type
    Code,
    /// Attached file
    File,
    /// Attached image
    Image,
    /// Saved search
    Search,
    /// Container note
    Book,
    /// Relation map
    RelationMap,
    /// Render script
    Render,
}

/// Kind of a note attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// A simple tag or property
    Label,
    /// A typed link whose value is another note's identifier
    Relation,
}

/// A typed key/value fact attached to a note
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Store-assigned identifier; empty until the attribute is created
    #[serde(default)]
    pub attribute_id: String,
    /// Identifier of the owning note
    #[serde(default)]
    pub note_id: String,
    /// Attribute kind
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    /// Attribute name; uniqueness is not enforced by the store
    pub name: String,
    /// Free text for labels, a note identifier for relations
    #[serde(default)]
    pub value: String,
    /// Store-assigned ordering position
    #[serde(default)]
    pub position: i64,
    /// Whether child notes inherit this attribute
    #[serde(default)]
    pub is_inheritable: bool,
}

/// A note's metadata, including its resolved parent/child link sets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque identifier, immutable once created
    pub note_id: String,
    /// Note title
    pub title: String,
    /// Note kind
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Content MIME type; primarily meaningful for code notes
    #[serde(default)]
    pub mime: String,
    /// Protection flag
    #[serde(default)]
    pub is_protected: bool,
    /// Local creation timestamp, store-assigned
    #[serde(default)]
    pub date_created: String,
    /// Local modification timestamp, store-assigned
    #[serde(default)]
    pub date_modified: String,
    /// UTC creation timestamp, store-assigned
    #[serde(default)]
    pub utc_date_created: String,
    /// UTC modification timestamp, store-assigned
    #[serde(default)]
    pub utc_date_modified: String,
    /// Identifiers of parent notes
    #[serde(default)]
    pub parent_note_ids: Vec<String>,
    /// Identifiers of child notes
    #[serde(default)]
    pub child_note_ids: Vec<String>,
    /// Identifiers of parent placement records
    #[serde(default)]
    pub parent_branch_ids: Vec<String>,
    /// Identifiers of child placement records
    #[serde(default)]
    pub child_branch_ids: Vec<String>,
    /// Attributes attached to this note
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A note together with its raw content
///
/// Assembled from two concurrent fetches; `content` is whatever the store
/// returned, before any format conversion.
#[derive(Debug, Clone)]
pub struct NoteWithContent {
    /// The note's metadata
    pub note: Note,
    /// The note's raw content as stored
    pub content: String,
}

/// A placement record attaching a note under a parent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Placement record identifier
    #[serde(default)]
    pub branch_id: String,
    /// Identifier of the placed note
    #[serde(default)]
    pub note_id: String,
    /// Identifier of the parent note
    #[serde(default)]
    pub parent_note_id: String,
    /// Position among siblings
    #[serde(default)]
    pub note_position: i64,
    /// Optional display prefix
    #[serde(default)]
    pub prefix: Option<String>,
    /// Whether the placement is expanded in the store's UI
    #[serde(default)]
    pub is_expanded: bool,
}

/// A lightweight note summary returned by the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Note identifier
    pub note_id: String,
    /// Note title
    pub title: String,
    /// Note kind
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Protection flag
    #[serde(default)]
    pub is_protected: bool,
}

/// Parameters for creating a note
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteParams {
    /// Identifier of the parent note
    pub parent_note_id: String,
    /// Title of the new note
    pub title: String,
    /// Note kind
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Content, already in the store's native representation
    pub content: String,
    /// MIME type for code notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

/// Response to note creation: the note and its placement record
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteResponse {
    /// The created note
    pub note: Note,
    /// The placement record attaching it to its parent
    pub branch: Branch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_kind_wire_values() {
        assert_eq!(serde_json::to_string(&NoteKind::Text).unwrap(), "\"text\"");
        assert_eq!(
            serde_json::to_string(&NoteKind::RelationMap).unwrap(),
            "\"relationMap\""
        );
        let kind: NoteKind = serde_json::from_str("\"book\"").unwrap();
        assert_eq!(kind, NoteKind::Book);
    }

    #[test]
    fn test_attribute_kind_wire_values() {
        assert_eq!(
            serde_json::to_string(&AttributeKind::Label).unwrap(),
            "\"label\""
        );
        let kind: AttributeKind = serde_json::from_str("\"relation\"").unwrap();
        assert_eq!(kind, AttributeKind::Relation);
    }

    #[test]
    fn test_note_deserializes_with_missing_optional_fields() {
        let note: Note = serde_json::from_str(
            r#"{"noteId": "abc123", "title": "Inbox", "type": "text"}"#,
        )
        .unwrap();

        assert_eq!(note.note_id, "abc123");
        assert_eq!(note.kind, NoteKind::Text);
        assert!(note.child_note_ids.is_empty());
        assert!(note.attributes.is_empty());
        assert!(!note.is_protected);
    }

    #[test]
    fn test_create_note_params_omit_absent_mime() {
        let params = CreateNoteParams {
            parent_note_id: "root".to_string(),
            title: "New".to_string(),
            kind: NoteKind::Text,
            content: "<p>hi</p>".to_string(),
            mime: None,
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["parentNoteId"], "root");
        assert_eq!(json["type"], "text");
        assert!(json.get("mime").is_none());
    }

    #[test]
    fn test_attribute_round_trip() {
        let attr: Attribute = serde_json::from_str(
            r#"{
                "attributeId": "attr1",
                "noteId": "abc123",
                "type": "label",
                "name": "priority",
                "value": "high",
                "position": 10,
                "isInheritable": true
            }"#,
        )
        .unwrap();

        assert_eq!(attr.kind, AttributeKind::Label);
        assert!(attr.is_inheritable);

        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json["type"], "label");
        assert_eq!(json["isInheritable"], true);
    }
}
