//! Composite-value projection persisted as descriptive metadata.
//!
//! Each leaf becomes exactly one record whose value packs the leaf's
//! attributes into a single `##`-delimited string. The layout is a
//! compatibility contract and must stay bit-exact:
//!
//! ```text
//! MIME##name##sizeBytes##rootHandle##sequenceId##checksum##[description]
//! ```
//!
//! Six fixed components, each followed by the delimiter; the description is
//! a bare trailing seventh component present only when non-empty. Without a
//! description the value keeps the trailing delimiter from the checksum
//! join.

use fieldcast_graph::LeafAttachment;
use fieldcast_shared::{FieldRole, GroupingRole, ProjectionRecord, Result};

/// Delimiter joining the composite's components.
pub const COMPONENT_DELIMITER: &str = "##";

/// Project one leaf into its metadata record.
///
/// The record key is the role's element qualifier, so primary and thumbnail
/// leaves coexist as distinct qualified values under the same
/// schema/element pair.
pub fn project<L: LeafAttachment>(
    role: GroupingRole,
    leaf: &L,
    root_handle: &str,
) -> Result<ProjectionRecord> {
    Ok(ProjectionRecord::new(
        role.qualifier(),
        composite_value(leaf, root_handle)?,
        FieldRole::Primary,
    ))
}

/// Build the `##`-delimited composite value for one leaf.
///
/// Attribute reads go through the store and may fault; faults propagate
/// unchanged — no component is ever defaulted.
pub fn composite_value<L: LeafAttachment>(leaf: &L, root_handle: &str) -> Result<String> {
    let mut value = String::new();
    for component in [
        leaf.mime_type()?,
        leaf.name()?,
        // Exact decimal rendering; sizes are non-negative.
        leaf.size_bytes()?.to_string(),
        root_handle.to_string(),
        leaf.sequence_id()?.to_string(),
        leaf.checksum()?,
    ] {
        value.push_str(&component);
        value.push_str(COMPONENT_DELIMITER);
    }
    if let Some(description) = leaf.description()? {
        if !description.is_empty() {
            value.push_str(&description);
        }
    }
    Ok(value)
}
