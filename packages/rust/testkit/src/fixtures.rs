//! In-memory content-graph fixtures with per-node fault injection.

use fieldcast_graph::{ContentRoot, Grouping, LeafAttachment, ProjectionTarget};
use fieldcast_shared::{FieldcastError, Result};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hex digest of `content`, for realistic fixture
/// checksums.
pub fn checksum_of(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Leaf attribute selector for fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafField {
    Name,
    MimeType,
    SizeBytes,
    SequenceId,
    Checksum,
    Description,
}

// ---------------------------------------------------------------------------
// LeafFixture
// ---------------------------------------------------------------------------

/// In-memory leaf attachment.
#[derive(Debug, Clone)]
pub struct LeafFixture {
    name: String,
    mime_type: String,
    size_bytes: u64,
    sequence_id: u32,
    checksum: String,
    description: Option<String>,
    failing: Option<LeafField>,
}

impl LeafFixture {
    /// Leaf with the given attributes and no description.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
        sequence_id: u32,
        checksum: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            sequence_id,
            checksum: checksum.into(),
            description: None,
            failing: None,
        }
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Derive size and checksum from actual content bytes.
    pub fn with_content(mut self, content: &[u8]) -> Self {
        self.size_bytes = content.len() as u64;
        self.checksum = checksum_of(content);
        self
    }

    /// Make reads of `field` raise a data-access fault.
    pub fn failing_on(mut self, field: LeafField) -> Self {
        self.failing = Some(field);
        self
    }

    fn check(&self, field: LeafField) -> Result<()> {
        if self.failing == Some(field) {
            return Err(FieldcastError::data_access(format!(
                "lookup failed for {field:?} on {}",
                self.name
            )));
        }
        Ok(())
    }
}

impl LeafAttachment for LeafFixture {
    fn name(&self) -> Result<String> {
        self.check(LeafField::Name)?;
        Ok(self.name.clone())
    }

    fn mime_type(&self) -> Result<String> {
        self.check(LeafField::MimeType)?;
        Ok(self.mime_type.clone())
    }

    fn size_bytes(&self) -> Result<u64> {
        self.check(LeafField::SizeBytes)?;
        Ok(self.size_bytes)
    }

    fn sequence_id(&self) -> Result<u32> {
        self.check(LeafField::SequenceId)?;
        Ok(self.sequence_id)
    }

    fn checksum(&self) -> Result<String> {
        self.check(LeafField::Checksum)?;
        Ok(self.checksum.clone())
    }

    fn description(&self) -> Result<Option<String>> {
        self.check(LeafField::Description)?;
        Ok(self.description.clone())
    }
}

// ---------------------------------------------------------------------------
// GroupingFixture
// ---------------------------------------------------------------------------

/// In-memory grouping. A denied grouping raises an authorization fault on
/// every read.
#[derive(Debug, Clone)]
pub struct GroupingFixture {
    name: String,
    leaves: Vec<LeafFixture>,
    denied: bool,
}

impl GroupingFixture {
    /// Readable grouping with no leaves yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            leaves: Vec::new(),
            denied: false,
        }
    }

    /// Grouping that denies read access.
    pub fn denied(name: impl Into<String>) -> Self {
        Self {
            denied: true,
            ..Self::new(name)
        }
    }

    /// Append a leaf in store order.
    pub fn with_leaf(mut self, leaf: LeafFixture) -> Self {
        self.leaves.push(leaf);
        self
    }

    fn check(&self) -> Result<()> {
        if self.denied {
            return Err(FieldcastError::authorization(format!(
                "READ denied on grouping {}",
                self.name
            )));
        }
        Ok(())
    }
}

impl Grouping for GroupingFixture {
    type Leaf = LeafFixture;

    fn name(&self) -> Result<String> {
        self.check()?;
        Ok(self.name.clone())
    }

    fn leaves(&self) -> Result<Vec<LeafFixture>> {
        self.check()?;
        Ok(self.leaves.clone())
    }
}

// ---------------------------------------------------------------------------
// RootFixture / NonRootTarget
// ---------------------------------------------------------------------------

/// In-memory content root.
#[derive(Debug, Clone)]
pub struct RootFixture {
    handle: String,
    groupings: Vec<GroupingFixture>,
    deny_groupings: bool,
}

impl RootFixture {
    /// Root with the given handle and no groupings yet.
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            groupings: Vec::new(),
            deny_groupings: false,
        }
    }

    /// Append a grouping in store order.
    pub fn with_grouping(mut self, grouping: GroupingFixture) -> Self {
        self.groupings.push(grouping);
        self
    }

    /// Make the grouping list itself unreadable.
    pub fn deny_groupings(mut self) -> Self {
        self.deny_groupings = true;
        self
    }
}

impl ContentRoot for RootFixture {
    type Group = GroupingFixture;

    fn handle(&self) -> Result<String> {
        Ok(self.handle.clone())
    }

    fn groupings(&self) -> Result<Vec<GroupingFixture>> {
        if self.deny_groupings {
            return Err(FieldcastError::authorization(format!(
                "READ denied on root {}",
                self.handle
            )));
        }
        Ok(self.groupings.clone())
    }
}

impl ProjectionTarget for RootFixture {
    type Root = RootFixture;

    fn as_content_root(&self) -> Option<&RootFixture> {
        Some(self)
    }
}

/// A target with no content-root view (a community/collection analog).
#[derive(Debug, Clone, Copy)]
pub struct NonRootTarget;

impl ProjectionTarget for NonRootTarget {
    type Root = RootFixture;

    fn as_content_root(&self) -> Option<&RootFixture> {
        None
    }
}
