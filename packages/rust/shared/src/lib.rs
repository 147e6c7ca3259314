//! Shared types and error model for Fieldcast.
//!
//! This crate is the foundation depended on by all other Fieldcast crates.
//! It provides:
//! - [`FieldcastError`] — the unified error type
//! - Domain vocabulary ([`GroupingRole`], [`FieldRole`], [`ProjectionRecord`],
//!   [`MetadataField`], [`RunOutcome`])

pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use error::{FieldcastError, Result};
pub use types::{FieldRole, GroupingRole, MetadataField, ProjectionRecord, RunOutcome};
