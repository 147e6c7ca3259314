//! Collaborator traits for the external content store.
//!
//! Fieldcast never owns content objects. It reads the graph through
//! [`ContentRoot`] / [`Grouping`] / [`LeafAttachment`], persists through
//! [`MetadataStore`], and indexes through [`DocumentWriter`]. Every read
//! accessor returns a `Result` because the store may deny access or fail
//! mid-lookup; implementations surface those as [`FieldcastError`]
//! authorization or data-access faults rather than skipping silently.

use fieldcast_shared::{MetadataField, Result};

/// A single stored file-like unit: the unit of projection.
pub trait LeafAttachment {
    /// Display name of the attachment.
    fn name(&self) -> Result<String>;

    /// MIME/format type.
    fn mime_type(&self) -> Result<String>;

    /// Size in bytes.
    fn size_bytes(&self) -> Result<u64>;

    /// Sequence identifier, unique within the owning root's lifetime.
    fn sequence_id(&self) -> Result<u32>;

    /// Content checksum as stored.
    fn checksum(&self) -> Result<String>;

    /// Optional free-text description. `None` and `Some("")` are both
    /// treated as absent by the projection rules.
    fn description(&self) -> Result<Option<String>>;
}

/// A named partition of attachments under a content root.
pub trait Grouping {
    /// Attachment type served by this grouping.
    type Leaf: LeafAttachment;

    /// Grouping name, matched exactly against the role table.
    fn name(&self) -> Result<String>;

    /// The grouping's attachments, in store order.
    fn leaves(&self) -> Result<Vec<Self::Leaf>>;
}

/// The top-level content entity being projected.
pub trait ContentRoot {
    /// Grouping type served by this root.
    type Group: Grouping;

    /// Stable external identifier (handle/URI) of the root.
    fn handle(&self) -> Result<String>;

    /// The root's groupings, in store order. The store defines the order;
    /// the pipeline never re-sorts.
    fn groupings(&self) -> Result<Vec<Self::Group>>;
}

/// Capability check performed once at a pipeline entry point.
///
/// Batch callers hand the pipeline whatever object their framework carries;
/// only objects exposing a content-root view are processed. This replaces
/// subtype dispatch with an explicit, one-shot check.
pub trait ProjectionTarget {
    /// Root type exposed by eligible targets.
    type Root: ContentRoot;

    /// The content-root view of this target, if it has one.
    fn as_content_root(&self) -> Option<&Self::Root>;
}

/// Write access to a root's descriptive metadata.
///
/// One run maps to one unit of work: `clear_field`, zero or more
/// `append_value` calls, then `commit`. Partial changes left behind by an
/// aborted run are discarded at the store's transactional boundary — the
/// pipeline implements no rollback of its own.
pub trait MetadataStore<R: ContentRoot> {
    /// Remove every value under `field` on `root`, matching any qualifier
    /// and any language.
    fn clear_field(&mut self, root: &R, field: &MetadataField) -> Result<()>;

    /// Append `value` under (`field.schema`, `field.element`, `qualifier`,
    /// `field.language`) on `root`.
    fn append_value(
        &mut self,
        root: &R,
        field: &MetadataField,
        qualifier: &str,
        value: &str,
    ) -> Result<()>;

    /// Persist the root's updated state.
    fn commit(&mut self, root: &R) -> Result<()>;
}

/// A search-index document under construction.
///
/// Strictly additive: the pipeline only ever appends fields, never reads or
/// clears them. Full-document replacement is the indexing layer's concern.
pub trait DocumentWriter {
    /// Append one (name, value) field to the document.
    fn add_field(&mut self, name: &str, value: &str);
}
