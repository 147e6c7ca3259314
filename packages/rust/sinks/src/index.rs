//! Additive search-index sink.
//!
//! The index sink only ever appends fields to the document under
//! construction; it never reads or clears existing ones. Full-document
//! replacement happens in the indexing layer that owns the document, one
//! build per root snapshot.

use fieldcast_graph::DocumentWriter;
use fieldcast_shared::ProjectionRecord;
use serde::{Deserialize, Serialize};

/// Wiring for the index sink: which grouping feeds it and which base field
/// names it writes. Defaults are a compatibility contract with existing
/// search schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSinkConfig {
    /// Grouping name whose leaves are indexed.
    #[serde(default = "default_grouping")]
    pub grouping: String,

    /// Base field name for leaf display names.
    #[serde(default = "default_filename_field")]
    pub filename_field: String,

    /// Base field name for leaf descriptions.
    #[serde(default = "default_description_field")]
    pub description_field: String,
}

fn default_grouping() -> String {
    "ORIGINAL".into()
}

fn default_filename_field() -> String {
    "original_bundle_filenames".into()
}

fn default_description_field() -> String {
    "original_bundle_descriptions".into()
}

impl Default for IndexSinkConfig {
    fn default() -> Self {
        Self {
            grouping: default_grouping(),
            filename_field: default_filename_field(),
            description_field: default_description_field(),
        }
    }
}

/// Sink adapter appending projection records to a search-index document.
#[derive(Debug, Clone, Default)]
pub struct IndexSink {
    config: IndexSinkConfig,
}

impl IndexSink {
    /// Sink with the default `ORIGINAL`-bundle wiring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink with custom wiring.
    pub fn with_config(config: IndexSinkConfig) -> Self {
        Self { config }
    }

    /// This sink's wiring.
    pub fn config(&self) -> &IndexSinkConfig {
        &self.config
    }

    /// Append every record as a (key, value) field on `document`, in
    /// record order.
    pub fn apply<D: DocumentWriter>(&self, document: &mut D, records: &[ProjectionRecord]) {
        for record in records {
            document.add_field(&record.key, &record.value);
        }
    }
}
