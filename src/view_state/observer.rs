//! Last-card visibility observer.
//!
//! Watches the last card rendered from the visible subset and emits a
//! load-more signal when it scrolls into view. The observer is an owned
//! value: attaching to a new target always releases the previous one, and
//! [`LastCardObserver::detach`] releases it on teardown.

use crate::model::LaunchId;
use tracing::trace;

/// Identity of an observed card.
///
/// Includes the number of applied pages so a render after a page arrives
/// counts as a new element even when the same record is still last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedCard {
    /// Id of the last visible record.
    pub id: LaunchId,
    /// Position in the visible subset.
    pub position: usize,
    /// Pages applied when the card was rendered.
    pub generation: usize,
}

/// Watches the last rendered card and signals when it enters view.
#[derive(Debug, Clone, Default)]
pub struct LastCardObserver {
    target: Option<ObservedCard>,
    in_view: bool,
}

impl LastCardObserver {
    /// Observer with no target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently observed card, if any.
    pub fn target(&self) -> Option<ObservedCard> {
        self.target
    }

    /// True while a card is observed.
    pub fn is_attached(&self) -> bool {
        self.target.is_some()
    }

    /// Point the observer at the current last card (or nothing).
    ///
    /// Returns true if the target changed, in which case the previous target
    /// was released and the new one starts out of view.
    pub fn attach(&mut self, target: Option<ObservedCard>) -> bool {
        if self.target == target {
            return false;
        }
        if let Some(previous) = self.target {
            trace!(id = %previous.id, position = previous.position, "Observer released");
        }
        self.target = target;
        self.in_view = false;
        true
    }

    /// Report whether the target is inside the viewport.
    ///
    /// Returns true exactly once per transition into view. Reports made
    /// while a page is loading are dropped so the observer does not re-arm
    /// during that window.
    pub fn observe(&mut self, in_view: bool, loading: bool) -> bool {
        if loading || self.target.is_none() {
            return false;
        }
        let entered = in_view && !self.in_view;
        self.in_view = in_view;
        if entered {
            trace!(card = ?self.target, "Last card entered view");
        }
        entered
    }

    /// Release the target.
    pub fn detach(&mut self) {
        self.target = None;
        self.in_view = false;
    }
}
