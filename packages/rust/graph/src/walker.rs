//! Read-only traversal of a content root's recognized groupings.
//!
//! [`walk`] flattens root → groupings → leaves into a lazy sequence of
//! `(GroupingRole, leaf)` pairs in store order. Groupings whose name is not
//! in the role table contribute nothing. Walking the same unchanged graph
//! twice reproduces the same pairs in the same order.

use fieldcast_shared::{GroupingRole, Result};

use crate::store::{ContentRoot, Grouping};

/// Start a walk over `root`.
///
/// The grouping list is fetched eagerly (so an unreadable root faults here);
/// each grouping's name and leaves are fetched lazily as the iterator
/// advances. The returned iterator yields `Err` once if a grouping read
/// faults and is fused afterwards — the caller decides whether to abort the
/// run or discard the partial result.
pub fn walk<R: ContentRoot>(root: &R) -> Result<Walk<R::Group>> {
    let groupings = root.groupings()?;
    Ok(Walk {
        groupings: groupings.into_iter(),
        current: None,
        failed: false,
    })
}

/// Lazy iterator over `(GroupingRole, leaf)` pairs. See [`walk`].
pub struct Walk<G: Grouping> {
    groupings: std::vec::IntoIter<G>,
    current: Option<(GroupingRole, std::vec::IntoIter<G::Leaf>)>,
    failed: bool,
}

impl<G: Grouping> Iterator for Walk<G> {
    type Item = Result<(GroupingRole, G::Leaf)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some((role, leaves)) = &mut self.current {
                if let Some(leaf) = leaves.next() {
                    return Some(Ok((*role, leaf)));
                }
                self.current = None;
            }

            let grouping = self.groupings.next()?;
            let name = match grouping.name() {
                Ok(name) => name,
                Err(fault) => {
                    self.failed = true;
                    return Some(Err(fault));
                }
            };
            // Unrecognized grouping: no role, no output pairs.
            let Some(role) = GroupingRole::from_grouping_name(&name) else {
                continue;
            };
            match grouping.leaves() {
                Ok(leaves) => self.current = Some((role, leaves.into_iter())),
                Err(fault) => {
                    self.failed = true;
                    return Some(Err(fault));
                }
            }
        }
    }
}

// Tests for the walker live in `tests/walker.rs` (an integration test) rather
// than inline here: they rely on `fieldcast-testkit`, which depends on this
// crate, so an inline `#[cfg(test)]` module would pull in a second copy of the
// crate and the fixtures' trait impls would not match the lib under test.
