//! Core domain types for the Fieldcast projection pipeline.

use serde::{Deserialize, Serialize};

use crate::error::FieldcastError;

// ---------------------------------------------------------------------------
// GroupingRole
// ---------------------------------------------------------------------------

/// Role of a named grouping within a content root.
///
/// The grouping-name-to-role table lives here and nowhere else: adding a new
/// recognized grouping means adding a variant and extending the three
/// `match` arms below. Name matching is exact and case-sensitive; groupings
/// whose name resolves to no role are invisible to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingRole {
    /// The `ORIGINAL` grouping: the root's primary attachments.
    Primary,
    /// The `THUMBNAIL` grouping: derived preview attachments.
    Thumbnail,
}

impl GroupingRole {
    /// Resolve a grouping name against the role table.
    pub fn from_grouping_name(name: &str) -> Option<Self> {
        match name {
            "ORIGINAL" => Some(Self::Primary),
            "THUMBNAIL" => Some(Self::Thumbnail),
            _ => None,
        }
    }

    /// The grouping name this role is resolved from.
    pub fn grouping_name(&self) -> &'static str {
        match self {
            Self::Primary => "ORIGINAL",
            Self::Thumbnail => "THUMBNAIL",
        }
    }

    /// The element qualifier used when persisting metadata for this role.
    pub fn qualifier(&self) -> &'static str {
        match self {
            Self::Primary => "original",
            Self::Thumbnail => "thumbnail",
        }
    }
}

impl std::fmt::Display for GroupingRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.qualifier())
    }
}

// ---------------------------------------------------------------------------
// FieldRole / ProjectionRecord
// ---------------------------------------------------------------------------

/// How a projected value is meant to be consumed by a sink.
///
/// One source value can fan out into several sink fields; the index sink in
/// particular stores an analyzed copy plus normalized duplicates for exact
/// faceting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldRole {
    /// The analyzed/displayed copy of the value.
    Primary,
    /// Normalized duplicate supporting exact-match faceting.
    FacetNormalized,
    /// Normalized duplicate supporting exact-match filtering.
    FilterNormalized,
}

/// One unit of pipeline output: a (field key, field value, field role) tuple.
///
/// For the metadata rule the key is the element qualifier (`original`,
/// `thumbnail`); for the index rule it is the full document field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRecord {
    /// Field key the sink writes under.
    pub key: String,
    /// Projected field value.
    pub value: String,
    /// Consumption role of this copy of the value.
    pub role: FieldRole,
}

impl ProjectionRecord {
    /// Build a record.
    pub fn new(key: impl Into<String>, value: impl Into<String>, role: FieldRole) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            role,
        }
    }
}

// ---------------------------------------------------------------------------
// MetadataField
// ---------------------------------------------------------------------------

/// The reserved descriptive-metadata field the metadata sink owns.
///
/// The sink clears this field (any qualifier, any language) before each run
/// and appends the run's values under per-record qualifiers and the fixed
/// `language` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataField {
    /// Metadata schema name.
    pub schema: String,
    /// Element within the schema.
    pub element: String,
    /// Language tag applied to appended values.
    pub language: String,
}

impl Default for MetadataField {
    fn default() -> Self {
        Self {
            schema: "dc".into(),
            element: "format".into(),
            language: "en".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// RunOutcome
// ---------------------------------------------------------------------------

/// Per-root outcome of a metadata projection run.
///
/// A batch caller sees exactly one of these per root — never a partial
/// success.
#[derive(Debug)]
pub enum RunOutcome {
    /// Records were projected and committed.
    Success,
    /// The root was ineligible or produced no records; no store call was made.
    Skip,
    /// A fault aborted the run; rollback is the store's transactional concern.
    Error(FieldcastError),
}

impl RunOutcome {
    /// Whether the run committed records.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether the run was a side-effect-free skip.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }

    /// Whether the run aborted on a fault.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_table_is_exact_and_case_sensitive() {
        assert_eq!(
            GroupingRole::from_grouping_name("ORIGINAL"),
            Some(GroupingRole::Primary)
        );
        assert_eq!(
            GroupingRole::from_grouping_name("THUMBNAIL"),
            Some(GroupingRole::Thumbnail)
        );
        // Not in the table: arbitrary names, wrong case, surrounding space
        assert_eq!(GroupingRole::from_grouping_name("LICENSE"), None);
        assert_eq!(GroupingRole::from_grouping_name("original"), None);
        assert_eq!(GroupingRole::from_grouping_name("ORIGINAL "), None);
        assert_eq!(GroupingRole::from_grouping_name(""), None);
    }

    #[test]
    fn role_round_trips_through_its_grouping_name() {
        for role in [GroupingRole::Primary, GroupingRole::Thumbnail] {
            assert_eq!(
                GroupingRole::from_grouping_name(role.grouping_name()),
                Some(role)
            );
        }
    }

    #[test]
    fn qualifiers_match_persisted_vocabulary() {
        assert_eq!(GroupingRole::Primary.qualifier(), "original");
        assert_eq!(GroupingRole::Thumbnail.qualifier(), "thumbnail");
    }

    #[test]
    fn metadata_field_defaults() {
        let field = MetadataField::default();
        assert_eq!(field.schema, "dc");
        assert_eq!(field.element, "format");
        assert_eq!(field.language, "en");
    }

    #[test]
    fn outcome_predicates() {
        assert!(RunOutcome::Success.is_success());
        assert!(RunOutcome::Skip.is_skip());
        let outcome = RunOutcome::Error(FieldcastError::data_access("down"));
        assert!(outcome.is_error());
        assert!(!outcome.is_success());
    }
}
