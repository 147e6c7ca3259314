//! Projection rules: pure transforms from (role, leaf) to field records.
//!
//! This crate provides:
//! - [`metadata`] — the `##`-delimited composite persisted as descriptive
//!   metadata, keyed by the role's qualifier
//! - [`index`] — the base/`_keyword`/`_filter` fan-out of filenames and
//!   descriptions for the search-index document
//!
//! Both rules only read leaf attributes; neither depends on processing
//! order across leaves or mutates its input.

pub mod index;
pub mod metadata;
