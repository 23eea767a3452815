//! Attribute reconciliation
//!
//! Applies a caller-supplied set of desired attributes against a note's
//! existing attribute set with create-or-update semantics keyed by
//! (kind, name). The existing set is a single snapshot taken by the caller;
//! it is not re-fetched between individual actions.

use serde::{Deserialize, Serialize};

use crate::error::{NotegateError, Result};
use crate::store::types::{Attribute, AttributeKind};
use crate::store::StoreClient;

/// A desired attribute supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSpec {
    /// Attribute kind
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    /// Attribute name
    pub name: String,
    /// Free text for labels, a note identifier for relations
    #[serde(default)]
    pub value: String,
    /// Whether child notes inherit this attribute
    #[serde(default)]
    pub is_inheritable: bool,
}

/// What the reconciler did for one desired attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppliedChange {
    /// No existing (kind, name) match; a new attribute was created
    Created,
    /// The first existing (kind, name) match was updated in place
    Updated,
}

/// Record of one applied attribute change
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedAttribute {
    /// Whether the attribute was created or updated
    pub action: AppliedChange,
    /// Attribute kind
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    /// Attribute name
    pub name: String,
    /// Value the attribute now carries
    pub value: String,
    /// Identifier of the touched attribute
    pub attribute_id: String,
}

/// Find the first existing attribute matching a desired entry's (kind, name)
fn find_match<'a>(existing: &'a [Attribute], spec: &AttributeSpec) -> Option<&'a Attribute> {
    existing
        .iter()
        .find(|attr| attr.kind == spec.kind && attr.name == spec.name)
}

/// Apply `desired` against the `existing` snapshot, in caller order
///
/// One remote call per desired entry, applied eagerly and sequentially. This
/// is not transactional: a failure partway through leaves the earlier actions
/// applied and aborts the rest, surfacing how much was committed.
///
/// Because `existing` is a snapshot, two desired entries sharing a
/// (kind, name) pair both resolve to the same pre-existing attribute and both
/// update it; the reconciler does not track consumed matches.
pub async fn reconcile_attributes(
    client: &StoreClient,
    note_id: &str,
    existing: &[Attribute],
    desired: &[AttributeSpec],
) -> Result<Vec<AppliedAttribute>> {
    let total = desired.len();
    let mut applied = Vec::with_capacity(total);

    for spec in desired {
        let outcome = match find_match(existing, spec) {
            Some(attr) => {
                tracing::debug!(
                    "updating attribute {} ({:?} '{}') on note {}",
                    attr.attribute_id,
                    spec.kind,
                    spec.name,
                    note_id
                );
                client
                    .update_attribute_value(&attr.attribute_id, &spec.value)
                    .await
                    .map(|attr| (AppliedChange::Updated, attr))
            }
            None => {
                tracing::debug!(
                    "creating attribute ({:?} '{}') on note {}",
                    spec.kind,
                    spec.name,
                    note_id
                );
                client
                    .create_attribute(note_id, spec)
                    .await
                    .map(|attr| (AppliedChange::Created, attr))
            }
        };

        match outcome {
            Ok((action, attr)) => applied.push(AppliedAttribute {
                action,
                kind: spec.kind,
                name: spec.name.clone(),
                value: attr.value,
                attribute_id: attr.attribute_id,
            }),
            Err(source) => {
                return Err(NotegateError::AttributePartial {
                    name: spec.name.clone(),
                    applied: applied.len(),
                    total,
                    source: Box::new(source),
                });
            }
        }
    }

    Ok(applied)
}
