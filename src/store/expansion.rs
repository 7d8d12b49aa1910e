//! Category expansion view-state.
//!
//! Tracks which categories currently show their subcategories. Keyed by
//! stable category id, so reordering or renaming never flips a row open
//! or closed. Absent means collapsed; new categories start collapsed.

use std::collections::HashSet;

use crate::model::CategoryId;

/// Set of categories whose subtrees are visible
#[derive(Debug, Clone, Default)]
pub struct ExpansionMap {
    expanded: HashSet<CategoryId>,
}

impl ExpansionMap {
    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.expanded.contains(&id)
    }

    /// Flip one category and return its new state (`true` = expanded)
    pub(crate) fn toggle(&mut self, id: CategoryId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Drop the entry for a deleted category
    pub(crate) fn remove(&mut self, id: CategoryId) {
        self.expanded.remove(&id);
    }
}
