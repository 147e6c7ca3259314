//! Error types for Fieldcast.
//!
//! Library crates use [`FieldcastError`] via `thiserror`. The two variants
//! mirror the only fault classes a content-store collaborator can raise;
//! the pipeline never retries, partially commits, or substitutes defaults,
//! so both are terminal for the root being processed.

/// Top-level error type for all Fieldcast operations.
#[derive(Debug, thiserror::Error)]
pub enum FieldcastError {
    /// The caller lacks permission to read or modify a node of the graph.
    #[error("authorization denied: {message}")]
    Authorization { message: String },

    /// The underlying store is unreachable or returned inconsistent data.
    #[error("data access fault: {message}")]
    DataAccess { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FieldcastError>;

impl FieldcastError {
    /// Create an authorization fault from any displayable message.
    pub fn authorization(msg: impl Into<String>) -> Self {
        Self::Authorization {
            message: msg.into(),
        }
    }

    /// Create a data-access fault from any displayable message.
    pub fn data_access(msg: impl Into<String>) -> Self {
        Self::DataAccess {
            message: msg.into(),
        }
    }

    /// Whether this fault is a permission denial (as opposed to a store fault).
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorization { .. })
    }
}
