//! Format conversion between the store's rich markup and the interchange form
//!
//! Text notes are rich markup (HTML) on the wire and markdown at the tool
//! boundary; every other note kind passes through unchanged in both
//! directions. The kind dispatch happens here, in a single match per
//! direction, so no other module needs to reason about note kinds.
//!
//! Conversion never fails: both directions degrade gracefully on malformed
//! input, and neither is required to round-trip to identical bytes.

pub mod html;
pub mod markdown;

use serde::{Deserialize, Serialize};

use crate::store::types::NoteKind;

pub use html::html_to_markdown;
pub use markdown::markdown_to_html;

/// Format a caller declares for content it writes
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Interchange form; converted to markup for text notes (the default)
    #[default]
    Markdown,
    /// Already rich markup; stored unchanged
    Html,
}

/// Format tag reported alongside content returned to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTag {
    /// Interchange form, produced from a text note's markup
    Markdown,
    /// Opaque passthrough, byte-identical to what the store returned
    Raw,
}

/// Content as presented at the tool boundary, with its declared format
#[derive(Debug, Clone)]
pub struct OutboundContent {
    /// The content body
    pub body: String,
    /// Declared format of `body`
    pub format: ContentTag,
}

/// Shape stored content for the caller, per note kind
pub fn content_for_caller(kind: NoteKind, stored: String) -> OutboundContent {
    match kind {
        NoteKind::Text => OutboundContent {
            body: html_to_markdown(&stored),
            format: ContentTag::Markdown,
        },
        _ => OutboundContent {
            body: stored,
            format: ContentTag::Raw,
        },
    }
}

/// Shape caller-supplied content for the store, per note kind and the
/// caller's declared input format
pub fn content_for_store(kind: NoteKind, body: String, format: ContentFormat) -> String {
    match (kind, format) {
        (NoteKind::Text, ContentFormat::Markdown) => markdown_to_html(&body),
        _ => body,
    }
}
