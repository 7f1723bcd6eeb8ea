//! Pagination controller.
//!
//! Owns the accumulated launch records and the flags that decide when the
//! next page is fetched. Pure state transitions; the I/O lives in
//! [`crate::source::PageLoader`].
//!
//! A load-more signal only marks a load as wanted. [`PaginationState::take_request`]
//! is the single place a fetch is issued, so a burst of signals before the
//! state settles still produces one request.

use crate::model::LaunchRecord;
use crate::source::{FetchedPage, PageRequest, PageResult};
use tracing::{debug, info, warn};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// What a completed fetch did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Records were appended.
    Appended(usize),
    /// The source is exhausted; `has_more` is now false.
    Exhausted,
    /// The fetch failed and was logged; nothing changed but the loading flag.
    Failed,
    /// The completion did not belong to the in-flight request.
    Ignored,
}

/// Pagination controller for the launch list.
#[derive(Debug, Clone)]
pub struct PaginationState {
    page: u32,
    page_size: u32,
    has_more: bool,
    in_flight: Option<PageRequest>,
    load_wanted: bool,
    pages_applied: usize,
    records: Vec<LaunchRecord>,
}

impl PaginationState {
    /// Fresh state as created at mount: page 1, nothing loaded, and the
    /// first page already wanted.
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            has_more: true,
            in_flight: None,
            load_wanted: true,
            pages_applied: 0,
            records: Vec::new(),
        }
    }

    /// Next page to request.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Records requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// False once the source returned an empty page.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True when a load has been asked for but not yet issued.
    pub fn is_load_wanted(&self) -> bool {
        self.load_wanted
    }

    /// Number of non-empty pages applied so far.
    ///
    /// Grows on every appended page, including one whose elements were all
    /// malformed, so it changes even when the record count does not.
    pub fn pages_applied(&self) -> usize {
        self.pages_applied
    }

    /// All records fetched so far, in fetch order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Signal from the last-card observer (or an explicit load-more key).
    ///
    /// Ignored while loading or once the source is exhausted.
    pub fn on_last_card_visible(&mut self) -> bool {
        if self.is_loading() || !self.has_more {
            debug!(
                loading = self.is_loading(),
                has_more = self.has_more,
                "Load-more signal ignored"
            );
            return false;
        }
        self.load_wanted = true;
        true
    }

    /// Issue the wanted load, if any.
    pub fn take_request(&mut self) -> Option<PageRequest> {
        if !self.load_wanted {
            return None;
        }
        self.load_wanted = false;
        self.request_page(self.page)
    }

    /// Mark `page` as in flight and return the request to dispatch.
    ///
    /// Returns `None` unless the controller is idle, has more data and
    /// `page` is its current page.
    pub fn request_page(&mut self, page: u32) -> Option<PageRequest> {
        if self.is_loading() || !self.has_more || page != self.page {
            debug!(
                requested = page,
                current = self.page,
                loading = self.is_loading(),
                has_more = self.has_more,
                "Page request refused"
            );
            return None;
        }
        let request = PageRequest::new(page, self.page_size);
        self.in_flight = Some(request);
        Some(request)
    }

    /// Apply a completed fetch.
    pub fn complete(&mut self, result: PageResult) -> PageOutcome {
        if self.in_flight != Some(result.request) {
            debug!(
                page = result.request.page,
                in_flight = ?self.in_flight,
                "Ignoring completion for a request that is not in flight"
            );
            return PageOutcome::Ignored;
        }
        self.in_flight = None;

        match result.outcome {
            Ok(page) => self.apply_page(result.request, page),
            Err(error) => {
                warn!(page = result.request.page, %error, "Error fetching launches");
                PageOutcome::Failed
            }
        }
    }

    fn apply_page(&mut self, request: PageRequest, page: FetchedPage) -> PageOutcome {
        if page.is_end_of_data() {
            info!(page = request.page, total = self.records.len(), "No more launches");
            self.has_more = false;
            self.load_wanted = false;
            return PageOutcome::Exhausted;
        }

        let appended = page.records.len();
        self.records.extend(page.records);
        self.page += 1;
        self.pages_applied += 1;
        debug!(
            page = request.page,
            appended,
            skipped = page.skipped,
            total = self.records.len(),
            "Page appended"
        );
        PageOutcome::Appended(appended)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
