//! Sink adapters consuming projection records.
//!
//! This crate provides:
//! - [`metadata`] — [`MetadataSink`]: clear-then-append persistence of
//!   records as descriptive metadata, with a per-root [`RunOutcome`]
//! - [`index`] — [`IndexSink`]: strictly additive append of records onto a
//!   search-index document, plus its [`IndexSinkConfig`] wiring
//!
//! [`RunOutcome`]: fieldcast_shared::RunOutcome

pub mod index;
pub mod metadata;

pub use index::{IndexSink, IndexSinkConfig};
pub use metadata::MetadataSink;
