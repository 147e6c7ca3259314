//! Shared test utilities for the Fieldcast workspace.
//!
//! This crate provides:
//! - [`RootFixture`] / [`GroupingFixture`] / [`LeafFixture`]: in-memory
//!   content graphs with per-node fault injection
//! - [`RecordingStore`]: a [`MetadataStore`] with operation recording and
//!   commit-gated durable state
//! - [`MemoryDocument`]: a [`DocumentWriter`] with JSON snapshots
//! - [`init_test_logging`]: opt-in tracing output for test debugging
//!
//! [`MetadataStore`]: fieldcast_graph::MetadataStore
//! [`DocumentWriter`]: fieldcast_graph::DocumentWriter

pub mod document;
pub mod fixtures;
pub mod store;

pub use document::MemoryDocument;
pub use fixtures::{
    GroupingFixture, LeafField, LeafFixture, NonRootTarget, RootFixture, checksum_of,
};
pub use store::{RecordingStore, StoreOp};

/// Initialize test logging (call once per test module).
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("fieldcast_core=debug".parse().expect("valid directive"))
                .add_directive("fieldcast_sinks=debug".parse().expect("valid directive")),
        )
        .with_test_writer()
        .try_init();
}
