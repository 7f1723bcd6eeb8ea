//! Card list viewport: which cards fit on screen.
//!
//! Cards have variable height (an expanded card is taller), so the viewport
//! works on a slice of per-card heights computed by the renderer. `offset`
//! is the display position of the topmost card.

use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Scroll position of the card list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListViewport {
    offset: usize,
}

impl ListViewport {
    /// Viewport scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first rendered card.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll back to the top.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scroll the minimum amount so the card at `selected` is on screen,
    /// showing it from its top edge when it is taller than the area.
    pub fn ensure_visible(&mut self, selected: usize, heights: &[u16], area_height: u16) {
        if heights.is_empty() {
            self.offset = 0;
            return;
        }
        let selected = selected.min(heights.len() - 1);
        self.offset = self.offset.min(heights.len() - 1);

        if selected < self.offset {
            self.offset = selected;
            return;
        }
        while self.offset < selected && span(&heights[self.offset..=selected]) > area_height as u32
        {
            self.offset += 1;
        }
    }

    /// Display positions of the cards at least partially on screen.
    pub fn visible_range(&self, heights: &[u16], area_height: u16) -> Range<usize> {
        let start = self.offset.min(heights.len());
        let mut used: u32 = 0;
        let mut end = start;
        while end < heights.len() && used < area_height as u32 {
            used += heights[end] as u32;
            end += 1;
        }
        start..end
    }

    /// True when the last card of the list is at least partially on screen.
    pub fn shows_last(&self, heights: &[u16], area_height: u16) -> bool {
        !heights.is_empty() && self.visible_range(heights, area_height).end == heights.len()
    }
}

fn span(heights: &[u16]) -> u32 {
    heights.iter().map(|&h| h as u32).sum()
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
