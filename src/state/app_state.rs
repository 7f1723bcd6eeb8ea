//! Top-level application state.
//!
//! Composes the pagination controller, the filter view, the expanded-card
//! selection and the search box. Every mutation that can change the
//! accumulated records or the search term re-derives the visible subset
//! here, so callers never have to remember to.

use crate::model::{LaunchId, LaunchRecord};
use crate::source::{PageRequest, PageResult};
use crate::state::{
    FilterView, PageOutcome, PaginationState, SearchInput, SelectionState,
};

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Card list has focus.
    #[default]
    List,
    /// Search field has focus.
    Search,
}

/// Complete state of the viewer.
#[derive(Debug, Clone)]
pub struct AppState {
    pagination: PaginationState,
    filter: FilterView,
    selection: SelectionState,
    search: SearchInput,
    /// Display position of the highlighted card.
    selected: usize,
    /// Pane that receives key input.
    pub focus: FocusPane,
    /// True while the help overlay is shown.
    pub help_visible: bool,
}

impl AppState {
    /// Fresh state; the first page is already wanted.
    pub fn new(page_size: u32) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            filter: FilterView::new(),
            selection: SelectionState::new(),
            search: SearchInput::new(),
            selected: 0,
            focus: FocusPane::List,
            help_visible: false,
        }
    }

    /// Pagination controller.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Filtered view of the records.
    pub fn filter(&self) -> &FilterView {
        &self.filter
    }

    /// Highlight and expansion.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Search field contents.
    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    /// All records fetched so far.
    pub fn records(&self) -> &[LaunchRecord] {
        self.pagination.records()
    }

    /// Number of records passing the filter.
    pub fn visible_len(&self) -> usize {
        self.filter.len()
    }

    /// Visible record at `position`.
    pub fn visible_record(&self, position: usize) -> Option<&LaunchRecord> {
        self.filter.get(self.pagination.records(), position)
    }

    /// Visible records in order.
    pub fn visible_records(&self) -> impl Iterator<Item = &LaunchRecord> {
        self.filter.visible_records(self.pagination.records())
    }

    /// Highlighted position in the visible subset.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Highlighted record, if any.
    pub fn selected_record(&self) -> Option<&LaunchRecord> {
        self.visible_record(self.selected)
    }

    // ===== Pagination =====

    /// Issue the wanted page request, if the controller allows one.
    pub fn take_request(&mut self) -> Option<PageRequest> {
        self.pagination.take_request()
    }

    /// Load-more signal. Returns whether it was accepted.
    pub fn load_more(&mut self) -> bool {
        self.pagination.on_last_card_visible()
    }

    /// Apply a completed fetch and re-derive the visible subset.
    pub fn apply_page_result(&mut self, result: PageResult) -> PageOutcome {
        let outcome = self.pagination.complete(result);
        self.filter.sync(self.pagination.records());
        self.clamp_selected();
        outcome
    }

    // ===== Search =====

    /// Replace the search term outright.
    pub fn set_search_term(&mut self, term: &str) {
        self.edit_search(|_| SearchInput::with_query(term));
    }

    /// Apply an edit to the search box; recomputes the filter when the
    /// query text changed.
    pub fn edit_search(&mut self, edit: impl FnOnce(SearchInput) -> SearchInput) {
        let before = std::mem::take(&mut self.search);
        let previous_query = before.query().to_string();
        self.search = edit(before);

        if self.search.query() != previous_query {
            self.filter
                .set_search_term(self.search.query(), self.pagination.records());
            self.selected = 0;
        }
    }

    // ===== Selection =====

    /// Expand the card `id`, or collapse it if already expanded.
    pub fn toggle_details(&mut self, id: LaunchId) -> bool {
        self.selection.toggle_details(id)
    }

    /// Toggle the detail panel of the highlighted card.
    pub fn toggle_selected_details(&mut self) -> Option<bool> {
        let id = self.selected_record()?.id();
        Some(self.selection.toggle_details(id))
    }

    /// True when `id` is the expanded card.
    pub fn is_expanded(&self, id: LaunchId) -> bool {
        self.selection.is_expanded(id)
    }

    // ===== Highlight navigation =====

    /// Move the highlight by `delta`, clamped to the list.
    pub fn select_by(&mut self, delta: isize) {
        let last = self.visible_len().saturating_sub(1);
        let target = self.selected.saturating_add_signed(delta);
        self.selected = target.min(last);
    }

    /// Highlight the first card.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Highlight the last card.
    pub fn select_last(&mut self) {
        self.selected = self.visible_len().saturating_sub(1);
    }

    /// Highlight `position`, clamped to the list.
    pub fn select(&mut self, position: usize) {
        self.selected = position;
        self.clamp_selected();
    }

    fn clamp_selected(&mut self) {
        self.selected = self.selected.min(self.visible_len().saturating_sub(1));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::state::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
