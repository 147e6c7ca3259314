//! Search-document projection: filename and description fan-out.
//!
//! Each leaf's display name fans out into three records — the base field
//! plus `_keyword` and `_filter` suffixed copies — because the search
//! backend needs separate analyzed/facet/filter copies of the same text.
//! Leaves with a non-empty description get the same fan-out under the
//! description field; absent or empty descriptions contribute nothing.

use fieldcast_graph::LeafAttachment;
use fieldcast_shared::{FieldRole, ProjectionRecord, Result};

/// Suffix of the facet-normalized copy.
pub const KEYWORD_SUFFIX: &str = "_keyword";

/// Suffix of the filter-normalized copy.
pub const FILTER_SUFFIX: &str = "_filter";

/// Project one leaf into its index records.
///
/// `filename_field` and `description_field` are the base field names; the
/// suffixed copies are derived from them. Order within the result is fixed:
/// filename triple first, then the description triple when present.
pub fn project<L: LeafAttachment>(
    leaf: &L,
    filename_field: &str,
    description_field: &str,
) -> Result<Vec<ProjectionRecord>> {
    let mut records = Vec::with_capacity(6);

    let name = leaf.name()?;
    records.extend(fan_out(filename_field, &name));

    if let Some(description) = leaf.description()? {
        if !description.is_empty() {
            records.extend(fan_out(description_field, &description));
        }
    }

    Ok(records)
}

/// The three-way copy of one value under one base field name.
fn fan_out(base: &str, value: &str) -> [ProjectionRecord; 3] {
    [
        ProjectionRecord::new(base, value, FieldRole::Primary),
        ProjectionRecord::new(
            format!("{base}{KEYWORD_SUFFIX}"),
            value,
            FieldRole::FacetNormalized,
        ),
        ProjectionRecord::new(
            format!("{base}{FILTER_SUFFIX}"),
            value,
            FieldRole::FilterNormalized,
        ),
    ]
}
