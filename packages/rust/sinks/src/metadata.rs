//! Clear-then-append metadata sink.
//!
//! The sink owns one reserved metadata field. A run replaces that field's
//! values with the supplied records inside the caller's unit of work:
//! clear (any qualifier, any language), append in record order, commit
//! once. Re-running on an unchanged graph therefore converges instead of
//! accumulating.

use fieldcast_graph::{ContentRoot, MetadataStore};
use fieldcast_shared::{MetadataField, ProjectionRecord, Result, RunOutcome};
use tracing::debug;

/// Sink adapter writing projection records as persisted descriptive
/// metadata on the root object.
#[derive(Debug, Clone, Default)]
pub struct MetadataSink {
    field: MetadataField,
}

impl MetadataSink {
    /// Sink over the default reserved field (`dc.format`, language `en`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink over a custom reserved field.
    pub fn with_field(field: MetadataField) -> Self {
        Self { field }
    }

    /// The reserved field this sink owns.
    pub fn field(&self) -> &MetadataField {
        &self.field
    }

    /// Replace the reserved field's values on `root` with `records`.
    ///
    /// Zero records report [`RunOutcome::Skip`] with no store-modifying
    /// call at all — not even the clear. Any fault aborts the remaining
    /// phases and maps to [`RunOutcome::Error`]; in-flight changes are
    /// discarded at the store's transactional boundary. Diagnostic detail
    /// is logged at debug level only.
    pub fn apply<R, S>(&self, store: &mut S, root: &R, records: &[ProjectionRecord]) -> RunOutcome
    where
        R: ContentRoot,
        S: MetadataStore<R>,
    {
        if records.is_empty() {
            debug!("no records projected, skipping root");
            return RunOutcome::Skip;
        }
        match self.write(store, root, records) {
            Ok(()) => RunOutcome::Success,
            Err(fault) => {
                debug!(%fault, "metadata run aborted");
                RunOutcome::Error(fault)
            }
        }
    }

    fn write<R, S>(&self, store: &mut S, root: &R, records: &[ProjectionRecord]) -> Result<()>
    where
        R: ContentRoot,
        S: MetadataStore<R>,
    {
        store.clear_field(root, &self.field)?;
        for record in records {
            store.append_value(root, &self.field, &record.key, &record.value)?;
        }
        store.commit(root)?;
        debug!(count = records.len(), "metadata run committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcast_shared::FieldRole;
    use fieldcast_testkit::{RecordingStore, RootFixture, StoreOp};

    fn record(qualifier: &str, value: &str) -> ProjectionRecord {
        ProjectionRecord::new(qualifier, value, FieldRole::Primary)
    }

    #[test]
    fn zero_records_skip_without_store_calls() {
        let root = RootFixture::new("123/456");
        let mut store = RecordingStore::new();

        let outcome = MetadataSink::new().apply(&mut store, &root, &[]);
        assert!(outcome.is_skip());
        assert!(store.operations().is_empty());
        assert!(store.durable_values().is_empty());
    }

    #[test]
    fn records_clear_append_commit_in_order() {
        let root = RootFixture::new("123/456");
        let mut store = RecordingStore::new();
        let records = vec![record("original", "v1"), record("thumbnail", "v2")];

        let outcome = MetadataSink::new().apply(&mut store, &root, &records);
        assert!(outcome.is_success());

        let ops = store.operations();
        assert_eq!(ops.len(), 4);
        assert!(matches!(&ops[0], StoreOp::Clear { schema, element }
            if schema == "dc" && element == "format"));
        assert!(matches!(&ops[1], StoreOp::Append { qualifier, value, language, .. }
            if qualifier == "original" && value == "v1" && language == "en"));
        assert!(matches!(&ops[2], StoreOp::Append { qualifier, .. }
            if qualifier == "thumbnail"));
        assert!(matches!(&ops[3], StoreOp::Commit));

        assert_eq!(
            store.durable_values(),
            vec![
                ("original".to_string(), "v1".to_string()),
                ("thumbnail".to_string(), "v2".to_string()),
            ]
        );
    }

    #[test]
    fn rerun_replaces_instead_of_accumulating() {
        let root = RootFixture::new("123/456");
        let mut store = RecordingStore::new();
        let records = vec![record("original", "v1")];
        let sink = MetadataSink::new();

        assert!(sink.apply(&mut store, &root, &records).is_success());
        let after_first = store.durable_values();
        assert!(sink.apply(&mut store, &root, &records).is_success());
        assert_eq!(store.durable_values(), after_first);
    }

    #[test]
    fn append_fault_leaves_durable_state_unchanged() {
        let root = RootFixture::new("123/456");
        let mut store = RecordingStore::new();
        let sink = MetadataSink::new();
        assert!(
            sink.apply(&mut store, &root, &[record("original", "old")])
                .is_success()
        );

        store.fail_on_append_number(2);
        let records = vec![record("original", "new1"), record("original", "new2")];
        let outcome = sink.apply(&mut store, &root, &records);
        assert!(outcome.is_error());

        // Clear + first append were staged but never committed.
        assert_eq!(
            store.durable_values(),
            vec![("original".to_string(), "old".to_string())]
        );
    }

    #[test]
    fn commit_fault_maps_to_error_outcome() {
        let root = RootFixture::new("123/456");
        let mut store = RecordingStore::new();
        store.fail_on_commit();

        let outcome = MetadataSink::new().apply(&mut store, &root, &[record("original", "v")]);
        match outcome {
            RunOutcome::Error(fault) => assert!(!fault.is_authorization()),
            other => panic!("expected error outcome, got {other:?}"),
        }
        assert!(store.durable_values().is_empty());
    }

    #[test]
    fn custom_field_flows_through_all_phases() {
        let root = RootFixture::new("123/456");
        let mut store = RecordingStore::new();
        let field = MetadataField {
            schema: "local".into(),
            element: "files".into(),
            language: "*".into(),
        };

        let sink = MetadataSink::with_field(field);
        assert!(
            sink.apply(&mut store, &root, &[record("original", "v")])
                .is_success()
        );
        assert!(matches!(&store.operations()[0], StoreOp::Clear { schema, element }
            if schema == "local" && element == "files"));
        assert!(matches!(&store.operations()[1], StoreOp::Append { language, .. }
            if language == "*"));
    }
}
