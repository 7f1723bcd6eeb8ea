//! Filter view: the visible subset of the accumulated launches.
//!
//! Case-insensitive substring match on the mission name. The subset is kept
//! as indices into the accumulated records and is always recomputed from
//! scratch, so edit history (insert, delete, clear) cannot leave it stale.

use crate::model::LaunchRecord;

/// True if `mission_name` contains the already lower-cased term.
pub fn matches_term(mission_name: &str, term_lower: &str) -> bool {
    mission_name.to_lowercase().contains(term_lower)
}

/// Indices of the records matching `term`, in record order.
///
/// A blank term matches every record.
pub fn filter_indices(records: &[LaunchRecord], term: &str) -> Vec<usize> {
    if term.trim().is_empty() {
        return (0..records.len()).collect();
    }
    let term_lower = term.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_term(record.mission_name(), &term_lower))
        .map(|(index, _)| index)
        .collect()
}

/// Visible subset of the accumulated records.
#[derive(Debug, Clone, Default)]
pub struct FilterView {
    term: String,
    visible: Vec<usize>,
    source_len: usize,
}

impl FilterView {
    /// Empty filter that shows every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// True when a non-blank term narrows the list.
    pub fn is_filtering(&self) -> bool {
        !self.term.trim().is_empty()
    }

    /// Indices into the accumulated records, in display order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Number of visible records.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// True when nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Replace the search term and recompute.
    pub fn set_search_term(&mut self, term: &str, records: &[LaunchRecord]) {
        self.term.clear();
        self.term.push_str(term);
        self.recompute(records);
    }

    /// Recompute if the accumulated set changed size since the last pass.
    ///
    /// Records are append-only, so a length change is the only change.
    pub fn sync(&mut self, records: &[LaunchRecord]) -> bool {
        if records.len() == self.source_len {
            return false;
        }
        self.recompute(records);
        true
    }

    /// Recompute the visible subset from scratch.
    pub fn recompute(&mut self, records: &[LaunchRecord]) {
        self.visible = filter_indices(records, &self.term);
        self.source_len = records.len();
    }

    /// The record at display position `position`.
    pub fn get<'a>(&self, records: &'a [LaunchRecord], position: usize) -> Option<&'a LaunchRecord> {
        self.visible
            .get(position)
            .and_then(|&index| records.get(index))
    }

    /// Visible records in display order.
    pub fn visible_records<'a>(
        &'a self,
        records: &'a [LaunchRecord],
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.visible.iter().filter_map(move |&index| records.get(index))
    }
}
