//! Expanded-card selection.
//!
//! At most one launch shows its detail panel. Keyed by [`LaunchId`].

use crate::model::LaunchId;

/// Which card, if any, shows its details.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    expanded: Option<LaunchId>,
}

impl SelectionState {
    /// Nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently expanded card.
    pub fn expanded(&self) -> Option<LaunchId> {
        self.expanded
    }

    /// True when `id` is expanded.
    pub fn is_expanded(&self, id: LaunchId) -> bool {
        self.expanded == Some(id)
    }

    /// Collapse `id` if it is expanded, otherwise expand it (collapsing any
    /// other card). Returns whether `id` is expanded afterwards.
    pub fn toggle_details(&mut self, id: LaunchId) -> bool {
        if self.is_expanded(id) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(id);
            true
        }
    }

    /// Collapse any expanded card.
    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
