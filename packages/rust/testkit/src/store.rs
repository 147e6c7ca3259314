//! Recording metadata store with a transactional visibility model.
//!
//! [`RecordingStore`] logs every operation for assertions and stages
//! mutations in a pending transaction that only becomes durable on
//! `commit` — mirroring the unit-of-work boundary the pipeline relies on
//! for rollback.

use fieldcast_graph::{ContentRoot, MetadataStore};
use fieldcast_shared::{FieldcastError, MetadataField, Result};

/// One recorded store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    /// `clear_field(schema, element)` — qualifier and language wildcards.
    Clear { schema: String, element: String },
    /// `append_value(...)`.
    Append {
        schema: String,
        element: String,
        qualifier: String,
        language: String,
        value: String,
    },
    /// `commit()`.
    Commit,
}

/// In-memory [`MetadataStore`] with operation recording and injectable
/// failures.
#[derive(Debug, Default)]
pub struct RecordingStore {
    operations: Vec<StoreOp>,
    /// Values visible after the last successful commit: (qualifier, value).
    durable: Vec<(String, String)>,
    /// Pending transaction, lazily opened by the first mutating call.
    staged: Option<Vec<(String, String)>>,
    appends_in_txn: usize,
    fail_clear: bool,
    fail_append_at: Option<usize>,
    fail_commit: bool,
}

impl RecordingStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations, in call order.
    pub fn operations(&self) -> Vec<StoreOp> {
        self.operations.clone()
    }

    /// Committed (qualifier, value) pairs, in append order.
    pub fn durable_values(&self) -> Vec<(String, String)> {
        self.durable.clone()
    }

    /// Make the next `clear_field` call fail.
    pub fn fail_on_clear(&mut self) {
        self.fail_clear = true;
    }

    /// Make the `n`-th `append_value` call of the next transaction fail
    /// (1-based).
    pub fn fail_on_append_number(&mut self, n: usize) {
        self.fail_append_at = Some(n);
    }

    /// Make the next `commit` call fail.
    pub fn fail_on_commit(&mut self) {
        self.fail_commit = true;
    }

    fn staged_mut(&mut self) -> &mut Vec<(String, String)> {
        self.staged.get_or_insert_with(|| self.durable.clone())
    }
}

impl<R: ContentRoot> MetadataStore<R> for RecordingStore {
    fn clear_field(&mut self, _root: &R, field: &MetadataField) -> Result<()> {
        if self.fail_clear {
            self.fail_clear = false;
            return Err(FieldcastError::data_access("clear failed"));
        }
        self.operations.push(StoreOp::Clear {
            schema: field.schema.clone(),
            element: field.element.clone(),
        });
        self.staged_mut().clear();
        Ok(())
    }

    fn append_value(
        &mut self,
        _root: &R,
        field: &MetadataField,
        qualifier: &str,
        value: &str,
    ) -> Result<()> {
        self.appends_in_txn += 1;
        if self.fail_append_at == Some(self.appends_in_txn) {
            self.fail_append_at = None;
            return Err(FieldcastError::data_access("append failed"));
        }
        self.operations.push(StoreOp::Append {
            schema: field.schema.clone(),
            element: field.element.clone(),
            qualifier: qualifier.to_string(),
            language: field.language.clone(),
            value: value.to_string(),
        });
        self.staged_mut().push((qualifier.to_string(), value.to_string()));
        Ok(())
    }

    fn commit(&mut self, _root: &R) -> Result<()> {
        self.appends_in_txn = 0;
        if self.fail_commit {
            self.fail_commit = false;
            // The failed transaction's staged changes are rolled back.
            self.staged = None;
            return Err(FieldcastError::data_access("commit failed"));
        }
        self.operations.push(StoreOp::Commit);
        if let Some(staged) = self.staged.take() {
            self.durable = staged;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RootFixture;

    #[test]
    fn staged_changes_become_durable_only_on_commit() {
        let root = RootFixture::new("1/1");
        let field = MetadataField::default();
        let mut store = RecordingStore::new();

        store.clear_field(&root, &field).unwrap();
        store.append_value(&root, &field, "original", "v").unwrap();
        assert!(store.durable_values().is_empty());

        store.commit(&root).unwrap();
        assert_eq!(
            store.durable_values(),
            vec![("original".to_string(), "v".to_string())]
        );
    }

    #[test]
    fn failed_commit_rolls_back_the_transaction() {
        let root = RootFixture::new("1/1");
        let field = MetadataField::default();
        let mut store = RecordingStore::new();

        store.append_value(&root, &field, "original", "old").unwrap();
        store.commit(&root).unwrap();

        store.fail_on_clear();
        assert!(store.clear_field(&root, &field).is_err());
        store.fail_on_commit();
        store.clear_field(&root, &field).unwrap();
        assert!(store.commit(&root).is_err());

        assert_eq!(
            store.durable_values(),
            vec![("original".to_string(), "old".to_string())]
        );
    }
}
