//! Pipeline orchestration for Fieldcast.
//!
//! This crate ties the graph walker, projection rules, and sink adapters
//! into per-root entry points ([`run_metadata_projection`],
//! [`run_index_projection`]) and re-exports the API a consumer needs to
//! wire the pipeline into a batch framework.

pub mod pipeline;

pub use fieldcast_graph::{
    ContentRoot, DocumentWriter, Grouping, LeafAttachment, MetadataStore, ProjectionTarget,
};
pub use fieldcast_shared::{
    FieldRole, FieldcastError, GroupingRole, MetadataField, ProjectionRecord, Result, RunOutcome,
};
pub use fieldcast_sinks::{IndexSink, IndexSinkConfig, MetadataSink};
pub use pipeline::{run_index_projection, run_metadata_projection};
