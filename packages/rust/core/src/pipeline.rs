//! Per-root pipeline entry points: walk → project → apply.
//!
//! Each function processes exactly one root snapshot within the calling
//! thread, using whatever transactional context the caller supplies, and
//! holds no state between invocations. Callers running batches invoke one
//! of these per root; callers running concurrently against the same root
//! must serialize metadata runs themselves.

use fieldcast_graph::{ContentRoot, DocumentWriter, MetadataStore, ProjectionTarget, walk};
use fieldcast_projection::{index, metadata};
use fieldcast_shared::{ProjectionRecord, Result, RunOutcome};
use fieldcast_sinks::{IndexSink, MetadataSink};
use tracing::{debug, instrument};

/// Replace `target`'s reserved metadata field with records projected from
/// its current graph snapshot.
///
/// Targets without a content-root view skip, as do roots whose recognized
/// groupings hold no attachments — both without touching the store. Faults
/// during walking, projection, or persistence map to
/// [`RunOutcome::Error`] for this root so a batch caller can continue with
/// the next one.
#[instrument(skip_all)]
pub fn run_metadata_projection<T, S>(
    sink: &MetadataSink,
    store: &mut S,
    target: &T,
) -> RunOutcome
where
    T: ProjectionTarget,
    S: MetadataStore<T::Root>,
{
    let Some(root) = target.as_content_root() else {
        debug!("target has no content-root view, skipping");
        return RunOutcome::Skip;
    };
    let records = match collect_metadata_records(root) {
        Ok(records) => records,
        Err(fault) => {
            debug!(%fault, "projection aborted");
            return RunOutcome::Error(fault);
        }
    };
    sink.apply(store, root, &records)
}

/// One metadata record per recognized-grouping leaf, in walk order.
fn collect_metadata_records<R: ContentRoot>(root: &R) -> Result<Vec<ProjectionRecord>> {
    let handle = root.handle()?;
    debug!(%handle, "projecting metadata records");
    let mut records = Vec::new();
    for pair in walk(root)? {
        let (role, leaf) = pair?;
        records.push(metadata::project(role, &leaf, &handle)?);
    }
    Ok(records)
}

/// Append index fields projected from `target` onto `document`.
///
/// Targets without a content-root view are a no-op (zero fields added).
/// Only leaves of the sink's configured grouping are indexed. This path
/// catches nothing: a fault aborts document construction for this root and
/// propagates to the caller that owns the indexing batch.
#[instrument(skip_all)]
pub fn run_index_projection<T, D>(sink: &IndexSink, target: &T, document: &mut D) -> Result<()>
where
    T: ProjectionTarget,
    D: DocumentWriter,
{
    let Some(root) = target.as_content_root() else {
        return Ok(());
    };
    let config = sink.config();
    for pair in walk(root)? {
        let (role, leaf) = pair?;
        if role.grouping_name() != config.grouping {
            continue;
        }
        let records = index::project(&leaf, &config.filename_field, &config.description_field)?;
        sink.apply(document, &records);
    }
    Ok(())
}
