//! Hierarchy materialization
//!
//! Expands the store's flat parent/child link model into a bounded tree of
//! lightweight node summaries. Nodes are constructed fresh per call and never
//! cached. A note that disappears mid-traversal fails the whole call; partial
//! trees are not returned.

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Serialize;

use crate::error::Result;
use crate::store::types::NoteKind;
use crate::store::StoreClient;

/// A materialized hierarchy element
///
/// `children` is absent (and omitted from JSON) when the node sits at the
/// depth bound or has no children of its own.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Note identifier
    pub note_id: String,
    /// Note title
    pub title: String,
    /// Note kind
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Child nodes in store order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

/// Materialize the children of `note_id` down to `max_depth` levels
///
/// Called with `current_depth` starting at 1. Siblings are resolved
/// concurrently by the gateway but assembled in the store's order. The depth
/// bound is validated by the caller; this function assumes it is sane.
pub fn build_tree(
    client: &StoreClient,
    note_id: String,
    current_depth: u32,
    max_depth: u32,
) -> BoxFuture<'_, Result<Vec<TreeNode>>> {
    async move {
        let children = client.get_note_children(&note_id).await?;

        let mut nodes = Vec::with_capacity(children.len());
        for child in children {
            let expand = current_depth < max_depth && !child.child_note_ids.is_empty();
            let grandchildren = if expand {
                Some(
                    build_tree(client, child.note_id.clone(), current_depth + 1, max_depth)
                        .await?,
                )
            } else {
                None
            };

            nodes.push(TreeNode {
                note_id: child.note_id,
                title: child.title,
                kind: child.kind,
                children: grandchildren,
            });
        }

        Ok(nodes)
    }
    .boxed()
}
