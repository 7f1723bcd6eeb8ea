//! Search box contents.
//!
//! The cursor is a character index so multi-byte input edits cleanly.

/// Text and cursor of the search field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    query: String,
    cursor: usize,
}

impl SearchInput {
    /// Empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `query`, cursor at the end.
    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        let cursor = query.chars().count();
        Self { query, cursor }
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Query length in characters.
    pub fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    pub(crate) fn byte_offset(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.query.len())
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut String, &mut usize) {
        (&mut self.query, &mut self.cursor)
    }
}
